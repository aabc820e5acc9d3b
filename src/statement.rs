use crate::{
    bind::Binds,
    error::{Error, Result, StatementKind},
    expr::{Expression, cond::WhereExpressionList, list::ExpressionList},
    ident::Ident,
    join::Joins,
    order::Order,
    paginate::Paginator,
    raw::Raw,
    writer::{FormatContext, FormatWriter},
};

/// A table of the statement, plus the raw tokens that follow it (`AS u`,
/// index hints, ...).
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TableExpr {
    pub(crate) ident: Ident,
    pub(crate) args: Vec<Raw>,
}

impl FormatWriter for TableExpr {
    fn format_writer(&self, context: &mut FormatContext<'_>) -> std::fmt::Result {
        self.ident.format_writer(context)?;
        for arg in &self.args {
            context.write_char(' ');
            arg.format_writer(context)?;
        }
        Ok(())
    }
}

/// Slots shared by DELETE and UPDATE, rendered in a fixed order around the
/// statement specific part.
#[derive(Debug, Default, Clone)]
pub(crate) struct Sections {
    pub(crate) prefixes: ExpressionList,
    pub(crate) options: ExpressionList,
    pub(crate) tables: Vec<TableExpr>,
    pub(crate) joins: Joins,
    pub(crate) wheres: WhereExpressionList,
    pub(crate) order: Order,
    pub(crate) paginator: Paginator,
    pub(crate) suffixes: ExpressionList,
}

impl Sections {
    pub(crate) fn check_table(&self, statement: StatementKind) -> Result<()> {
        if self.tables.is_empty() {
            return Err(Error::MissingTable { statement });
        }
        Ok(())
    }

    pub(crate) fn check_where(&self, statement: StatementKind) -> Result<()> {
        if self.wheres.is_empty() {
            return Err(Error::MissingWhereCondition { statement });
        }
        Ok(())
    }

    /// `prefixes KEYWORD options `
    pub(crate) fn format_head(&self, context: &mut FormatContext<'_>, keyword: &str) -> Result<()> {
        if !self.prefixes.is_empty() {
            self.prefixes.append_to_sql(context, " ")?;
            context.write_char(' ');
        }
        context.write_str(keyword);
        context.write_char(' ');
        if !self.options.is_empty() {
            self.options.append_to_sql(context, " ")?;
            context.write_char(' ');
        }
        Ok(())
    }

    pub(crate) fn format_tables(&self, context: &mut FormatContext<'_>) -> Result<()> {
        context.write_list(&self.tables, ", ")?;
        Ok(())
    }

    pub(crate) fn format_joins(&self, context: &mut FormatContext<'_>) -> Result<()> {
        if !self.joins.is_empty() {
            context.write_char(' ');
            self.joins.append_to_sql(context)?;
        }
        Ok(())
    }

    /// ` WHERE .. ORDER BY .. LIMIT .. OFFSET .. suffixes`
    pub(crate) fn format_tail(&self, context: &mut FormatContext<'_>) -> Result<()> {
        if !self.wheres.is_empty() {
            context.write_str(" WHERE ");
            self.wheres.append_to_sql(context, " AND ")?;
        }
        if !self.order.is_empty() {
            context.write_str(" ORDER BY ");
            self.order.format_writer(context)?;
        }
        self.paginator.format_writer(context)?;
        if !self.suffixes.is_empty() {
            context.write_char(' ');
            self.suffixes.append_to_sql(context, " ")?;
        }
        Ok(())
    }

    pub(crate) fn push_where(&mut self, expr: Expression) {
        self.wheres.push(expr);
    }
}

/// Runs `format` over a fresh buffer, handing back the text and binds only
/// when every section rendered.
pub(crate) fn render<F>(format: F) -> Result<(String, Binds)>
where
    F: FnOnce(&mut FormatContext<'_>) -> Result<()>,
{
    let size_hint = 64;
    let mut sql = String::with_capacity(size_hint);
    let mut context = FormatContext::new(&mut sql);
    format(&mut context)?;
    let binds = context.into_binds();
    Ok((sql, binds))
}

/// Fluent methods shared by the statement builders. The builder must hold
/// its shared slots in a `sections: Sections` field.
macro_rules! sections_methods {
    () => {
        /// Adds a fragment written before the statement keyword.
        pub fn prefix<R, B>(&mut self, sql: R, binds: B) -> &mut Self
        where
            R: $crate::raw::IntoRaw,
            B: $crate::bind::IntoBinds,
        {
            self.sections
                .prefixes
                .push($crate::expr::Expression::new(sql, binds));
            self
        }

        /// Adds keyword options written after the statement keyword
        /// (`LOW_PRIORITY`, `IGNORE`, ...).
        pub fn options<I, R>(&mut self, options: I) -> &mut Self
        where
            I: IntoIterator<Item = R>,
            R: $crate::raw::IntoRaw,
        {
            for option in options {
                self.sections
                    .options
                    .push($crate::expr::Expression::new(option, ()));
            }
            self
        }

        pub fn table<T>(&mut self, table: T) -> &mut Self
        where
            T: $crate::ident::IntoIdent,
        {
            self.table_args(table, std::iter::empty::<&str>())
        }

        /// Adds a table followed by raw tokens, e.g. `table_args("users", ["AS u"])`.
        pub fn table_args<T, I, R>(&mut self, table: T, args: I) -> &mut Self
        where
            T: $crate::ident::IntoIdent,
            I: IntoIterator<Item = R>,
            R: $crate::raw::IntoRaw,
        {
            self.sections.tables.push($crate::statement::TableExpr {
                ident: table.into_ident(),
                args: args.into_iter().map($crate::raw::IntoRaw::into_raw).collect(),
            });
            self
        }

        pub fn join_with<T, S, B>(
            &mut self,
            ty: $crate::join::JoinType,
            table: T,
            suffix: S,
            binds: B,
        ) -> &mut Self
        where
            T: $crate::ident::IntoIdent,
            S: $crate::raw::IntoRaw,
            B: $crate::bind::IntoBinds,
        {
            self.sections.joins.push(ty, table, suffix, binds);
            self
        }

        pub fn join<T, S, B>(&mut self, table: T, suffix: S, binds: B) -> &mut Self
        where
            T: $crate::ident::IntoIdent,
            S: $crate::raw::IntoRaw,
            B: $crate::bind::IntoBinds,
        {
            self.join_with($crate::join::JoinType::Join, table, suffix, binds)
        }

        pub fn inner_join<T, S, B>(&mut self, table: T, suffix: S, binds: B) -> &mut Self
        where
            T: $crate::ident::IntoIdent,
            S: $crate::raw::IntoRaw,
            B: $crate::bind::IntoBinds,
        {
            self.join_with($crate::join::JoinType::Inner, table, suffix, binds)
        }

        pub fn left_join<T, S, B>(&mut self, table: T, suffix: S, binds: B) -> &mut Self
        where
            T: $crate::ident::IntoIdent,
            S: $crate::raw::IntoRaw,
            B: $crate::bind::IntoBinds,
        {
            self.join_with($crate::join::JoinType::Left, table, suffix, binds)
        }

        pub fn right_join<T, S, B>(&mut self, table: T, suffix: S, binds: B) -> &mut Self
        where
            T: $crate::ident::IntoIdent,
            S: $crate::raw::IntoRaw,
            B: $crate::bind::IntoBinds,
        {
            self.join_with($crate::join::JoinType::Right, table, suffix, binds)
        }

        pub fn cross_join<T>(&mut self, table: T) -> &mut Self
        where
            T: $crate::ident::IntoIdent,
        {
            self.join_with($crate::join::JoinType::Cross, table, "", ())
        }

        /// Adds a WHERE fragment.
        ///
        /// Fragments are joined with ` AND ` rather than a bare space, and each
        /// one is parenthesized once there are several, so an `OR` inside a
        /// fragment stays local to it.
        ///
        /// ```
        /// let (sql, _) = dba::DeleteBuilder::new()
        ///     .table("t")
        ///     .where_raw("a = ? OR b = ?", (1i32, 2i32))
        ///     .where_raw("c = ?", 3i32)
        ///     .to_sql()
        ///     .unwrap();
        /// assert_eq!("DELETE FROM `t` WHERE (a = ? OR b = ?) AND (c = ?)", sql);
        /// ```
        pub fn where_raw<R, B>(&mut self, sql: R, binds: B) -> &mut Self
        where
            R: $crate::raw::IntoRaw,
            B: $crate::bind::IntoBinds,
        {
            self.sections
                .push_where($crate::expr::Expression::new(sql, binds));
            self
        }

        pub fn where_eq<C, V>(&mut self, column: C, value: V) -> &mut Self
        where
            C: AsRef<str>,
            V: $crate::bind::IntoBind,
        {
            let sql = smol_str::format_smolstr!("{} = ?", column.as_ref());
            self.where_raw(sql, value.into_bind())
        }

        /// `column IN (?, ..)`; an empty list matches nothing (`1=0`).
        pub fn where_in<C, V>(&mut self, column: C, values: V) -> &mut Self
        where
            C: AsRef<str>,
            V: $crate::bind::IntoBinds,
        {
            let values = values.into_binds();
            if values.is_empty() {
                return self.where_raw("1=0", ());
            }
            let mut sql = String::from(column.as_ref());
            sql.push_str(" IN (");
            for index in 0..values.len() {
                if index > 0 {
                    sql.push_str(", ");
                }
                sql.push('?');
            }
            sql.push(')');
            self.where_raw(sql, values)
        }

        /// Replaces every WHERE fragment with the rendering of `clause`.
        ///
        /// A clause rendering to nothing leaves the builder untouched.
        pub fn where_clause<C>(&mut self, clause: C) -> $crate::error::Result<&mut Self>
        where
            C: $crate::clause::Clause,
        {
            let (sql, binds) = clause.to_sql()?;
            if sql.is_empty() {
                return Ok(self);
            }
            self.sections
                .wheres
                .replace($crate::expr::Expression::new(sql, binds));
            Ok(self)
        }

        pub fn order_by<I, R>(&mut self, items: I) -> &mut Self
        where
            I: IntoIterator<Item = R>,
            R: $crate::raw::IntoRaw,
        {
            for item in items {
                self.sections.order.push_raw(item);
            }
            self
        }

        pub fn order_by_asc<R>(&mut self, column: R) -> &mut Self
        where
            R: $crate::raw::IntoRaw,
        {
            self.sections
                .order
                .push_column(column, $crate::order::Ordering::Asc);
            self
        }

        pub fn order_by_desc<R>(&mut self, column: R) -> &mut Self
        where
            R: $crate::raw::IntoRaw,
        {
            self.sections
                .order
                .push_column(column, $crate::order::Ordering::Desc);
            self
        }

        pub fn limit(&mut self, limit: u64) -> &mut Self {
            self.sections.paginator.limit(limit);
            self
        }

        pub fn offset(&mut self, offset: u64) -> &mut Self {
            self.sections.paginator.offset(offset);
            self
        }

        /// Adds a fragment written after everything else (`RETURNING id`, ...).
        pub fn suffix<R, B>(&mut self, sql: R, binds: B) -> &mut Self
        where
            R: $crate::raw::IntoRaw,
            B: $crate::bind::IntoBinds,
        {
            self.sections
                .suffixes
                .push($crate::expr::Expression::new(sql, binds));
            self
        }

        pub fn has_where(&self) -> bool {
            !self.sections.wheres.is_empty()
        }

        /// Renders then runs the statement through `prepare`.
        pub fn exec<P>(
            &self,
            prepare: &mut P,
        ) -> std::result::Result<$crate::exec::ExecOutput<P>, $crate::error::ExecError<P::Error>>
        where
            P: $crate::exec::Prepare,
        {
            let (sql, binds) = self.to_sql()?;
            $crate::exec::exec(prepare, &sql, binds).map_err($crate::error::ExecError::Executor)
        }

        /// Renders then queries through `prepare`, for statements that
        /// return rows (`RETURNING`).
        pub fn query<P>(
            &self,
            prepare: &mut P,
        ) -> std::result::Result<$crate::exec::QueryRows<P>, $crate::error::ExecError<P::Error>>
        where
            P: $crate::exec::Prepare,
        {
            let (sql, binds) = self.to_sql()?;
            $crate::exec::query(prepare, &sql, binds).map_err($crate::error::ExecError::Executor)
        }

        /// Renders then runs the statement on a sqlx executor. A value the
        /// database cannot encode fails with `sqlx::Error::Encode` before
        /// anything is sent.
        #[cfg(any(feature = "mysql", feature = "sqlite"))]
        pub async fn execute<'c, DB, E>(
            &self,
            executor: E,
        ) -> std::result::Result<
            <DB as sqlx::Database>::QueryResult,
            $crate::error::ExecError<sqlx::Error>,
        >
        where
            DB: $crate::driver::EncodeBinds,
            E: sqlx::Executor<'c, Database = DB>,
        {
            let (sql, binds) = self.to_sql()?;
            $crate::driver::execute(&sql, binds, executor)
                .await
                .map_err($crate::error::ExecError::Executor)
        }
    };
}

pub(crate) use sections_methods;

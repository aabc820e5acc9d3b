//! Synchronous execution boundary.
//!
//! The builders only render; running the SQL is left to a [`Prepare`]
//! implementation wrapping the actual database handle.

use crate::bind::Binds;

/// Something that can prepare a statement from SQL text, typically a
/// connection or a transaction.
pub trait Prepare {
    type Error: std::error::Error + 'static;
    type Statement: PreparedStatement<Error = Self::Error>;

    fn prepare(&mut self, sql: &str) -> Result<Self::Statement, Self::Error>;
}

/// A prepared statement. Binds are applied positionally, in order.
///
/// Dropping the statement releases it.
pub trait PreparedStatement {
    type Error: std::error::Error + 'static;
    type Output;
    type Rows;

    fn execute(&mut self, binds: Binds) -> Result<Self::Output, Self::Error>;

    fn query(&mut self, binds: Binds) -> Result<Self::Rows, Self::Error>;
}

pub type ExecOutput<P> = <<P as Prepare>::Statement as PreparedStatement>::Output;

pub type QueryRows<P> = <<P as Prepare>::Statement as PreparedStatement>::Rows;

/// Prepares `sql`, executes it with `binds` and releases the statement,
/// whatever the outcome.
pub fn exec<P>(prepare: &mut P, sql: &str, binds: Binds) -> Result<ExecOutput<P>, P::Error>
where
    P: Prepare,
{
    tracing::debug!(sql, binds = binds.len(), "executing statement");
    let mut statement = prepare.prepare(sql)?;
    statement.execute(binds)
}

/// Prepares `sql`, queries it with `binds` and releases the statement,
/// whatever the outcome.
pub fn query<P>(prepare: &mut P, sql: &str, binds: Binds) -> Result<QueryRows<P>, P::Error>
where
    P: Prepare,
{
    tracing::debug!(sql, binds = binds.len(), "querying statement");
    let mut statement = prepare.prepare(sql)?;
    statement.query(binds)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::{cell::RefCell, rc::Rc};

    use thiserror::Error;

    use crate::bind::{Bind, IntoBinds};

    use super::*;

    #[derive(Debug, Error, PartialEq)]
    pub(crate) enum MockError {
        #[error("prepare failed: {0}")]
        Prepare(String),
        #[error("execute failed")]
        Execute,
    }

    #[derive(Debug, Default)]
    pub(crate) struct Journal {
        pub(crate) prepared: Vec<String>,
        pub(crate) executed: Vec<Vec<Bind>>,
        pub(crate) released: usize,
    }

    /// Records every call; fails on demand.
    #[derive(Debug, Default)]
    pub(crate) struct MockConn {
        pub(crate) journal: Rc<RefCell<Journal>>,
        pub(crate) fail_prepare: bool,
        pub(crate) fail_execute: bool,
    }

    pub(crate) struct MockStatement {
        journal: Rc<RefCell<Journal>>,
        fail: bool,
    }

    impl Drop for MockStatement {
        fn drop(&mut self) {
            self.journal.borrow_mut().released += 1;
        }
    }

    impl PreparedStatement for MockStatement {
        type Error = MockError;
        type Output = u64;
        type Rows = Vec<Vec<Bind>>;

        fn execute(&mut self, binds: Binds) -> Result<u64, MockError> {
            if self.fail {
                return Err(MockError::Execute);
            }
            let len = binds.len() as u64;
            self.journal.borrow_mut().executed.push(binds.into_vec());
            Ok(len)
        }

        fn query(&mut self, binds: Binds) -> Result<Vec<Vec<Bind>>, MockError> {
            if self.fail {
                return Err(MockError::Execute);
            }
            Ok(vec![binds.into_vec()])
        }
    }

    impl Prepare for MockConn {
        type Error = MockError;
        type Statement = MockStatement;

        fn prepare(&mut self, sql: &str) -> Result<MockStatement, MockError> {
            if self.fail_prepare {
                return Err(MockError::Prepare(sql.to_owned()));
            }
            self.journal.borrow_mut().prepared.push(sql.to_owned());
            Ok(MockStatement {
                journal: Rc::clone(&self.journal),
                fail: self.fail_execute,
            })
        }
    }

    #[test]
    fn test_exec_releases_statement() {
        let mut conn = MockConn::default();
        let affected = exec(&mut conn, "DELETE FROM `t` WHERE id = ?", 3i32.into_binds()).unwrap();
        assert_eq!(1, affected);
        let journal = conn.journal.borrow();
        assert_eq!(vec!["DELETE FROM `t` WHERE id = ?".to_owned()], journal.prepared);
        assert_eq!(vec![vec![Bind::I32(3)]], journal.executed);
        assert_eq!(1, journal.released);
    }

    #[test]
    fn test_exec_failure_still_releases() {
        let mut conn = MockConn {
            fail_execute: true,
            ..Default::default()
        };
        let err = exec(&mut conn, "DELETE FROM `t` WHERE 1", Binds::None).unwrap_err();
        assert_eq!(MockError::Execute, err);
        assert_eq!(1, conn.journal.borrow().released);
    }

    #[test]
    fn test_prepare_failure_passes_through() {
        let mut conn = MockConn {
            fail_prepare: true,
            ..Default::default()
        };
        let err = query(&mut conn, "SELECT ?", 1i32.into_binds()).unwrap_err();
        assert_eq!(MockError::Prepare("SELECT ?".to_owned()), err);
        assert_eq!(0, conn.journal.borrow().released);
    }

    #[test]
    fn test_query_rows() {
        let mut conn = MockConn::default();
        let rows = query(&mut conn, "SELECT ?, ?", (1i32, 2i32).into_binds()).unwrap();
        assert_eq!(vec![vec![Bind::I32(1), Bind::I32(2)]], rows);
        assert_eq!(1, conn.journal.borrow().released);
    }
}

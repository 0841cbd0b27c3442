// Create the Error, ErrorKind, ResultExt, and Result types
// Result is a typedef of std `Result` with the error type our own `Error`
// Defines the From conversions that let ? work for our `Error`.
// ResultExt adds the `chain_err` trait method.
#![allow(deprecated)]

use error_chain::*;

error_chain! {

    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        MalformedMaze(reason: String) {
            description("malformed maze")
            display("malformed maze: {}", reason)
        }
        InvalidDimensions(rows: usize, columns: usize) {
            description("invalid maze dimensions")
            display("cannot generate a maze of {} rows by {} columns, at least two even aligned cells are required",
                    rows, columns)
        }
        EmptyFrontier {
            description("empty frontier")
            display("cannot remove a node from an empty frontier")
        }
        NoSolution {
            description("no solution")
            display("no path exists from the start to the goal")
        }
        IterationLimitExceeded(limit: usize) {
            description("iteration limit exceeded")
            display("search gave up after exploring {} states", limit)
        }
    }
}

//! Error handling and exit codes.

use keycalc_core::constants::exit_codes;
use keycalc_core::CalcError;

/// Exit code for a calculator error.
pub fn calc_error_code(err: &CalcError) -> i32 {
    match err {
        CalcError::InvalidDigit(_)
        | CalcError::UnknownKey(_)
        | CalcError::UnterminatedKey(_) => exit_codes::ERROR_INPUT,
        CalcError::Config(_) => exit_codes::ERROR_CONFIG,
    }
}

/// Handle an application error and return the appropriate exit code.
pub fn handle_error(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CalcError>()
        .map_or(exit_codes::ERROR_GENERIC, calc_error_code)
}

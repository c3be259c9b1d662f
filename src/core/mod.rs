/*-------------------------------------------------------------------------------------------------
  Core Modules
-------------------------------------------------------------------------------------------------*/

pub mod categories;
pub mod check_result;
pub mod classifier;
pub mod client;
pub mod errors;
pub mod json;
pub mod range_set;
pub mod validator;

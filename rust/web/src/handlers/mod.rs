pub mod compare;
pub mod health;

pub use compare::{
    api_compare, evaluate, index, submit_form, CompareError, CompareRequest, CompareResponse,
    HandReport,
};
pub use health::health;

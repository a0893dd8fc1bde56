pub mod answer;
pub mod report;
pub mod response_set;
pub mod screening;
pub mod status;
pub mod validation;

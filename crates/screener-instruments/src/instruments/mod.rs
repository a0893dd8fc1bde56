pub mod asrs;
pub mod audit;
pub mod phq9;

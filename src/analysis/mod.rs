pub mod champions;
pub mod kpi;
pub mod mastery;
pub mod region;

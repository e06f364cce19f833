/// UI layer: filter side panel, KPI counters, central dashboard.

pub mod counter;
pub mod dashboard;
pub mod panels;

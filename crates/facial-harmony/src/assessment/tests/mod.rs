mod aggregation;
mod common;
mod invariants;
mod routing;

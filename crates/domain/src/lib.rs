// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod category;
mod error;
mod fact;
mod fragment;
mod ids;
mod interval;
mod month;

#[cfg(test)]
mod tests;

pub use category::{
    Category, Deduction, DisabilityDegree, IncomeOwner, LivingSituation, Outcome, Payload,
};
pub use error::DomainError;
pub use fact::VersionedFact;
pub use fragment::DecisionFragment;
pub use ids::{DecisionId, FactId};
pub use interval::{
    Interval, coalesce, has_overlapping, is_contiguous, min_and_max_of, subtract_all,
};
pub use month::Month;

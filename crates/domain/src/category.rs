// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Eligibility categories and the business payloads attached to them.
//!
//! A category is either an eligibility condition (vilkår) that is assessed
//! with an [`Outcome`], or part of the entitlement basis (grunnlag) that the
//! calculation engine consumes. Payloads carry no period of their own; their
//! validity is always the interval of the fact that holds them.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The assessed categories of a supplementary benefit case.
///
/// Not every case type assesses every category; a fragment simply omits the
/// ones that do not apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Disability (uføre).
    Disability,
    /// Age (alder), for old-age cases.
    Age,
    /// Refugee status (flyktning).
    Refugee,
    /// Lawful stay in the country (lovlig opphold).
    LawfulStay,
    /// Permanent residence in the country (fast opphold).
    Residency,
    /// Stays abroad (utenlandsopphold).
    StayAbroad,
    /// Institutional stay (institusjonsopphold).
    InstitutionalStay,
    /// Wealth (formue).
    Wealth,
    /// Personal appearance when applying (personlig oppmøte).
    PersonalAppearance,
    /// Timely application (flyktning/søknadsfrist formalities).
    FormalApplication,
    /// Duty to provide information (opplysningsplikt).
    DutyToInform,
    /// Other pension entitlements (pensjon).
    Pension,
    /// Family reunification (familiegjenforening).
    FamilyReunification,
    /// Household situation (bosituasjon), part of the entitlement basis.
    Household,
    /// Income deductions (fradrag), part of the entitlement basis.
    Income,
}

impl Category {
    /// Converts this category to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Disability => "Disability",
            Self::Age => "Age",
            Self::Refugee => "Refugee",
            Self::LawfulStay => "LawfulStay",
            Self::Residency => "Residency",
            Self::StayAbroad => "StayAbroad",
            Self::InstitutionalStay => "InstitutionalStay",
            Self::Wealth => "Wealth",
            Self::PersonalAppearance => "PersonalAppearance",
            Self::FormalApplication => "FormalApplication",
            Self::DutyToInform => "DutyToInform",
            Self::Pension => "Pension",
            Self::FamilyReunification => "FamilyReunification",
            Self::Household => "Household",
            Self::Income => "Income",
        }
    }

    /// Whether this category feeds the benefit calculation rather than the
    /// eligibility assessment.
    #[must_use]
    pub const fn is_entitlement_basis(&self) -> bool {
        matches!(self, Self::Household | Self::Income)
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Disability" => Ok(Self::Disability),
            "Age" => Ok(Self::Age),
            "Refugee" => Ok(Self::Refugee),
            "LawfulStay" => Ok(Self::LawfulStay),
            "Residency" => Ok(Self::Residency),
            "StayAbroad" => Ok(Self::StayAbroad),
            "InstitutionalStay" => Ok(Self::InstitutionalStay),
            "Wealth" => Ok(Self::Wealth),
            "PersonalAppearance" => Ok(Self::PersonalAppearance),
            "FormalApplication" => Ok(Self::FormalApplication),
            "DutyToInform" => Ok(Self::DutyToInform),
            "Pension" => Ok(Self::Pension),
            "FamilyReunification" => Ok(Self::FamilyReunification),
            "Household" => Ok(Self::Household),
            "Income" => Ok(Self::Income),
            _ => Err(format!("Unknown category: {s}")),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of assessing an eligibility condition for a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The condition is met (innvilget).
    Granted,
    /// The condition is not met (avslag / opphørt).
    Rejected,
    /// Not yet determined (uavklart).
    Undetermined,
}

/// Degree of disability in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DisabilityDegree(u8);

impl DisabilityDegree {
    /// Creates a disability degree.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDisabilityDegree` if `percent` exceeds 100.
    pub const fn new(percent: u8) -> Result<Self, DomainError> {
        if percent > 100 {
            return Err(DomainError::InvalidDisabilityDegree(percent));
        }
        Ok(Self(percent))
    }

    /// Returns the degree in percent.
    #[must_use]
    pub const fn percent(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DisabilityDegree {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DisabilityDegree> for u8 {
    fn from(degree: DisabilityDegree) -> Self {
        degree.0
    }
}

/// Who the applicant lives with (bosituasjon).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LivingSituation {
    /// Lives alone.
    Single,
    /// Shares a home with other adults who are not a spouse or partner.
    SharesHousehold,
    /// Spouse or partner aged 67 or older.
    SpouseAged67OrOlder,
    /// Spouse or partner under 67 who is not disabled or a refugee.
    SpouseUnder67,
    /// Spouse or partner under 67 who is disabled or a refugee.
    SpouseUnder67DisabledOrRefugee,
}

/// Whose income a deduction belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncomeOwner {
    /// The applicant (bruker).
    Applicant,
    /// The applicant's spouse or partner (EPS).
    Spouse,
}

/// A single income deduction (fradrag).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deduction {
    /// Free-form deduction type, e.g. "Arbeidsinntekt".
    pub kind: String,
    /// Amount per month, in whole NOK. Valid for every month of the fact.
    pub monthly_amount: u32,
    /// Whose income this is.
    pub owner: IncomeOwner,
}

/// The category-specific business content of a versioned fact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Payload {
    /// A plain assessment of an eligibility condition.
    Assessment {
        /// The assessment outcome.
        outcome: Outcome,
    },
    /// Disability assessment with its basis (uføregrunnlag).
    Disability {
        /// The assessment outcome.
        outcome: Outcome,
        /// Degree of disability.
        degree: DisabilityDegree,
        /// Expected yearly income, in whole NOK.
        expected_annual_income: u32,
    },
    /// Wealth assessment with its basis (formuegrunnlag).
    Wealth {
        /// The assessment outcome.
        outcome: Outcome,
        /// The applicant's wealth, in whole NOK.
        applicant: u64,
        /// The spouse's wealth, if there is a spouse.
        spouse: Option<u64>,
    },
    /// Household situation.
    Household {
        /// Who the applicant lives with.
        living_situation: LivingSituation,
    },
    /// Income deductions.
    Income {
        /// All deductions valid for the fact's period.
        deductions: Vec<Deduction>,
    },
}

impl Payload {
    /// A short name for the payload variant, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Assessment { .. } => "Assessment",
            Self::Disability { .. } => "Disability",
            Self::Wealth { .. } => "Wealth",
            Self::Household { .. } => "Household",
            Self::Income { .. } => "Income",
        }
    }

    /// The assessment outcome, for payloads that carry one.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match self {
            Self::Assessment { outcome }
            | Self::Disability { outcome, .. }
            | Self::Wealth { outcome, .. } => Some(*outcome),
            Self::Household { .. } | Self::Income { .. } => None,
        }
    }

    /// Whether this payload may describe `category`.
    ///
    /// Entitlement-basis categories require their dedicated payload. The
    /// disability and wealth payloads only describe their own category,
    /// while a plain assessment describes any eligibility condition.
    #[must_use]
    pub const fn describes(&self, category: Category) -> bool {
        match self {
            Self::Assessment { .. } => !category.is_entitlement_basis(),
            Self::Disability { .. } => matches!(category, Category::Disability),
            Self::Wealth { .. } => matches!(category, Category::Wealth),
            Self::Household { .. } => matches!(category, Category::Household),
            Self::Income { .. } => matches!(category, Category::Income),
        }
    }
}

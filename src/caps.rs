//! Actions, subjects and the capability pair built from them

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{CREATE, DELETE, MANAGE, READ, UPDATE};
use crate::error::NavError;

/// What a user wants to do with a subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
    /// Covers every other action on the same subject
    Manage,
}

impl Action {
    pub const ALL: [Action; 5] = [Action::Read, Action::Create, Action::Update, Action::Delete, Action::Manage];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Manage => "manage",
        }
    }

    /// Bit this action occupies in an ability mask
    #[inline]
    pub fn bit(self) -> u8 {
        match self {
            Action::Read => READ,
            Action::Create => CREATE,
            Action::Update => UPDATE,
            Action::Delete => DELETE,
            Action::Manage => MANAGE,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = NavError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.as_str() == value)
            .ok_or_else(|| NavError::UnknownAction(value.to_string()))
    }
}

macro_rules! subjects {
    ($($variant:ident),+ $(,)?) => {
        /// Domain resource an action applies to, or the `all` wildcard
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum Subject {
            $($variant,)+
            #[serde(rename = "all")]
            All,
        }

        impl Subject {
            /// Every subject except the wildcard, in catalog order.
            /// Append only: positions determine built-in permission ids.
            pub const CONCRETE: &'static [Subject] = &[$(Subject::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Subject::$variant => stringify!($variant),)+
                    Subject::All => "all",
                }
            }
        }
    };
}

subjects! {
    User,
    Rol,
    SimpleCatalog,
    CompositeCatalog,
    SimplePrice,
    CompositePrice,
    DeteriorationCatalog,
    MRPerformanceIndicator,
    PerformanceCatalog,
    MtAccidentRoadSection,
    MtActionCategory,
    MtAdministration,
    MtAxis,
    MtBusinessUnit,
    MtCalification,
    MtCountry,
    MtCurrencyUnit,
    MtDeteriorationType,
    MtDisposition,
    MtFollowUp,
    MtGeographicalArea,
    MtHighwayIntersection,
    MtHighwayLane,
    MtPosition,
    MtPriority,
    MtProcessForm,
    MtProjectCategory,
    MonitoringUnit,
    MtSide,
    MtSlipLaneRoad,
    MtSpecialtyAction,
    MtStructureNumber,
    MtSubCategoryAction,
    MtSubspeciality,
    MtTypology,
    MtUnitOfMeasurement,
    MtYear,
    MtRoadSection,
    MtStructureTypology,
    PlanningAmountsPerformance,
    PlanningTasksPerformance,
    MeasurementTab,
    Projects,
    Resumenes,
    ManualPerformanceCatalog,
    Coefficient,
    PLP,
    ExchangeRate,
    InflationRate,
    Area,
    Department,
    GeneralAccountPlan,
    OperatingExpense,
    AreaUnidadNegocio,
    DepartmentOperatingExpense,
    OperatingExpenseSubOperatingExpense,
    SubOperatingExpense,
    SubCategoryOperatingExpense,
    SubCategoryOperatingExpenseMudes,
    MudesFamily,
    FamilyGroup,
    MaterialsGroup,
    ProjectOp,
    ProjectOpTask,
    ProjectOpTaskDetail,
    ProjectOpMaterial,
    PersonalInventory,
    InfrastructureInventory,
    EquipmentInventory,
    CeCoDescription,
    CeCoPosition,
    EndowmentMatrix,
    EquipmentRepository,
    PayrollPositionClassification,
    RoadSafety,
    SystemIts,
    CivilWork,
    MaterialsCatalog,
    ConservationActivity,
    CompositeWork,
}

impl Subject {
    /// Position in `CONCRETE`, `None` for the wildcard
    pub fn position(self) -> Option<usize> {
        Subject::CONCRETE.iter().position(|s| *s == self)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subject {
    type Err = NavError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == "all" {
            return Ok(Subject::All);
        }
        Subject::CONCRETE
            .iter()
            .copied()
            .find(|s| s.as_str() == value)
            .ok_or_else(|| NavError::UnknownSubject(value.to_string()))
    }
}

/// "May perform `action` on `subject`"
///
/// Serialized as a two-element array, e.g. `["read", "User"]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(Action, Subject)", into = "(Action, Subject)")]
pub struct Capability {
    pub action: Action,
    pub subject: Subject,
}

impl Capability {
    pub const fn new(action: Action, subject: Subject) -> Self {
        Capability { action, subject }
    }

    pub const fn read(subject: Subject) -> Self {
        Capability::new(Action::Read, subject)
    }

    pub const fn manage(subject: Subject) -> Self {
        Capability::new(Action::Manage, subject)
    }
}

impl From<(Action, Subject)> for Capability {
    fn from((action, subject): (Action, Subject)) -> Self {
        Capability { action, subject }
    }
}

impl From<Capability> for (Action, Subject) {
    fn from(c: Capability) -> Self {
        (c.action, c.subject)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.action, self.subject)
    }
}

pub mod contact;
pub mod qualification;
pub mod response;

pub use contact::ContactInfo;
pub use qualification::{
    AgeRange, BudgetRange, DisqualifyReason, QualificationStatus, RiskAnswer, Urgency,
};
pub use response::{AssessmentResponse, ResponsePatch};

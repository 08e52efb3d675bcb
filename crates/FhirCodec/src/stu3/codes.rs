//! Closed code systems bound by the STU3 schemas.

use crate::CodeSystem;

/// Resource types known to this profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
#[code_system(url = "http://hl7.org/fhir/resource-types", rename_all = "PascalCase")]
pub enum ResourceType {
    Basic,
    Bundle,
    CarePlan,
    CareTeam,
    Condition,
    Goal,
    Medication,
    Observation,
    Organization,
    Patient,
    Practitioner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
#[code_system(url = "http://hl7.org/fhir/administrative-gender")]
pub enum AdministrativeGender {
    Male,
    Female,
    Other,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
#[code_system(url = "http://hl7.org/fhir/narrative-status")]
pub enum NarrativeStatus {
    Generated,
    Extensions,
    Additional,
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
#[code_system(url = "http://hl7.org/fhir/identifier-use")]
pub enum IdentifierUse {
    Usual,
    Official,
    Temp,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
#[code_system(url = "http://hl7.org/fhir/quantity-comparator")]
pub enum QuantityComparator {
    #[code("<")]
    LessThan,
    #[code("<=")]
    LessOrEqual,
    #[code(">=")]
    GreaterOrEqual,
    #[code(">")]
    GreaterThan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
#[code_system(url = "http://hl7.org/fhir/name-use")]
pub enum NameUse {
    Usual,
    Official,
    Temp,
    Nickname,
    Anonymous,
    Old,
    Maiden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
#[code_system(url = "http://hl7.org/fhir/contact-point-system")]
pub enum ContactPointSystem {
    Phone,
    Fax,
    Email,
    Pager,
    Url,
    Sms,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
#[code_system(url = "http://hl7.org/fhir/contact-point-use")]
pub enum ContactPointUse {
    Home,
    Work,
    Temp,
    Old,
    Mobile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
#[code_system(url = "http://hl7.org/fhir/address-use")]
pub enum AddressUse {
    Home,
    Work,
    Temp,
    Old,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
#[code_system(url = "http://hl7.org/fhir/address-type")]
pub enum AddressType {
    Postal,
    Physical,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
#[code_system(url = "http://hl7.org/fhir/link-type")]
pub enum LinkType {
    ReplacedBy,
    Replace,
    Refer,
    #[code("seealso")]
    SeeAlso,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
#[code_system(url = "http://hl7.org/fhir/observation-status")]
pub enum ObservationStatus {
    Registered,
    Preliminary,
    Final,
    Amended,
    Corrected,
    Cancelled,
    EnteredInError,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
#[code_system(url = "http://hl7.org/fhir/observation-relationshiptypes")]
pub enum ObservationRelationshipType {
    HasMember,
    DerivedFrom,
    SequelTo,
    Replaces,
    QualifiedBy,
    InterferedBy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
#[code_system(url = "http://hl7.org/fhir/care-plan-status")]
pub enum CarePlanStatus {
    Draft,
    Active,
    Suspended,
    Completed,
    EnteredInError,
    Cancelled,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
#[code_system(url = "http://hl7.org/fhir/care-plan-intent")]
pub enum CarePlanIntent {
    Proposal,
    Plan,
    Order,
    Option,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
#[code_system(url = "http://hl7.org/fhir/care-plan-activity-status")]
pub enum CarePlanActivityStatus {
    NotStarted,
    Scheduled,
    InProgress,
    OnHold,
    Completed,
    Cancelled,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
#[code_system(url = "http://hl7.org/fhir/care-team-status")]
pub enum CareTeamStatus {
    Proposed,
    Active,
    Suspended,
    Inactive,
    EnteredInError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
#[code_system(url = "http://hl7.org/fhir/goal-status")]
pub enum GoalStatus {
    Proposed,
    Accepted,
    Planned,
    InProgress,
    OnTarget,
    AheadOfTarget,
    BehindTarget,
    Sustaining,
    Achieved,
    OnHold,
    Cancelled,
    EnteredInError,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
#[code_system(url = "http://hl7.org/fhir/condition-clinical")]
pub enum ConditionClinicalStatus {
    Active,
    Recurrence,
    Inactive,
    Remission,
    Resolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
#[code_system(url = "http://hl7.org/fhir/condition-ver-status")]
pub enum ConditionVerificationStatus {
    Provisional,
    Differential,
    Confirmed,
    Refuted,
    EnteredInError,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
#[code_system(url = "http://hl7.org/fhir/medication-status")]
pub enum MedicationStatus {
    Active,
    Inactive,
    EnteredInError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
#[code_system(url = "http://hl7.org/fhir/bundle-type")]
pub enum BundleType {
    Document,
    Message,
    Transaction,
    TransactionResponse,
    Batch,
    BatchResponse,
    History,
    Searchset,
    Collection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
#[code_system(url = "http://hl7.org/fhir/http-verb", rename_all = "UPPERCASE")]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
#[code_system(url = "http://hl7.org/fhir/search-entry-mode")]
pub enum SearchEntryMode {
    Match,
    Include,
    Outcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
#[code_system(url = "http://unitsofmeasure.org", rename_all = "lowercase")]
pub enum UnitsOfTime {
    S,
    Min,
    H,
    D,
    Wk,
    Mo,
    A,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
#[code_system(url = "http://hl7.org/fhir/days-of-week", rename_all = "lowercase")]
pub enum DayOfWeek {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

//! Closed code systems bound by the R4 schemas.

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
    Parameters,
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
    Old,
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
    Billing,
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
    Replaces,
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

/// Status of request resources; `CarePlan.status` binds to it in R4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
#[code_system(url = "http://hl7.org/fhir/request-status")]
pub enum RequestStatus {
    Draft,
    Active,
    OnHold,
    Revoked,
    Completed,
    EnteredInError,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
#[code_system(name = "CarePlanIntent", url = "http://hl7.org/fhir/request-intent")]
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
    Stopped,
    Unknown,
    EnteredInError,
}

/// Resource types a `CarePlan.activity.detail` can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
#[code_system(url = "http://hl7.org/fhir/ValueSet/care-plan-activity-kind", rename_all = "PascalCase")]
pub enum CarePlanActivityKind {
    Appointment,
    CommunicationRequest,
    DeviceRequest,
    MedicationRequest,
    NutritionOrder,
    Task,
    ServiceRequest,
    VisionPrescription,
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
pub enum GoalLifecycleStatus {
    Proposed,
    Planned,
    Accepted,
    Active,
    OnHold,
    Completed,
    Cancelled,
    EnteredInError,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
#[code_system(url = "http://hl7.org/fhir/CodeSystem/medication-status")]
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
    Head,
    Post,
    Put,
    Delete,
    Patch,
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

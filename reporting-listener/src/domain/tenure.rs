//! The tenure entity served by the upstream housing API.
//!
//! Deserialized from the API's camelCase JSON; rendered for the record
//! builder with the PascalCase member names the reporting schemas declare.
//! Dates stay typed end-to-end so the builder's runtime date detection
//! applies to them.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use avro_record::{ObjectBuilder, SourceValue, ToSource};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenure {
    pub id: Uuid,
    #[serde(default)]
    pub payment_reference: Option<String>,
    #[serde(default)]
    pub start_of_tenure_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_of_tenure_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub succession_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub eviction_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub potential_end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sublet_end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_tenanted: Option<bool>,
    #[serde(default)]
    pub is_sublet: Option<bool>,
    #[serde(default)]
    pub is_mutual_exchange: Option<bool>,
    #[serde(default)]
    pub inform_housing_benefits_for_changes: Option<bool>,
    #[serde(default)]
    pub household_members: Vec<HouseholdMember>,
    #[serde(default)]
    pub tenured_asset: Option<TenuredAsset>,
    #[serde(default)]
    pub tenure_type: Option<TenureType>,
    #[serde(default)]
    pub agreement_type: Option<AgreementType>,
    #[serde(default)]
    pub charges: Option<Charges>,
    #[serde(default)]
    pub terminated: Option<Terminated>,
    #[serde(default)]
    pub notices: Vec<Notice>,
    #[serde(default)]
    pub legacy_references: Vec<LegacyReference>,
}

impl ToSource for Tenure {
    fn to_source(&self) -> SourceValue {
        ObjectBuilder::new()
            .field("Id", &self.id)
            .field("PaymentReference", &self.payment_reference)
            .field("StartOfTenureDate", &self.start_of_tenure_date)
            .field("EndOfTenureDate", &self.end_of_tenure_date)
            .field("SuccessionDate", &self.succession_date)
            .field("EvictionDate", &self.eviction_date)
            .field("PotentialEndDate", &self.potential_end_date)
            .field("SubletEndDate", &self.sublet_end_date)
            .field("IsTenanted", &self.is_tenanted)
            .field("IsSublet", &self.is_sublet)
            .field("IsMutualExchange", &self.is_mutual_exchange)
            .field(
                "InformHousingBenefitsForChanges",
                &self.inform_housing_benefits_for_changes,
            )
            .field("HouseholdMembers", &self.household_members)
            .field("TenuredAsset", &self.tenured_asset)
            .field("TenureType", &self.tenure_type)
            .field("AgreementType", &self.agreement_type)
            .field("Charges", &self.charges)
            .field("Terminated", &self.terminated)
            .field("Notices", &self.notices)
            .field("LegacyReferences", &self.legacy_references)
            .build()
    }
}

/// Whether a household member is a person or an organisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum HouseholdMembersType {
    Person,
    Organisation,
}

impl HouseholdMembersType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HouseholdMembersType::Person => "Person",
            HouseholdMembersType::Organisation => "Organisation",
        }
    }
}

impl ToSource for HouseholdMembersType {
    fn to_source(&self) -> SourceValue {
        SourceValue::String(self.as_str().to_string())
    }
}

/// The member's relationship to the tenure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PersonTenureType {
    Tenant,
    Leaseholder,
    Freeholder,
    HouseholdMember,
    Occupant,
}

impl PersonTenureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonTenureType::Tenant => "Tenant",
            PersonTenureType::Leaseholder => "Leaseholder",
            PersonTenureType::Freeholder => "Freeholder",
            PersonTenureType::HouseholdMember => "HouseholdMember",
            PersonTenureType::Occupant => "Occupant",
        }
    }
}

impl ToSource for PersonTenureType {
    fn to_source(&self) -> SourceValue {
        SourceValue::String(self.as_str().to_string())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdMember {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub member_type: HouseholdMembersType,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub is_responsible: Option<bool>,
    #[serde(default)]
    pub date_of_birth: Option<DateTime<Utc>>,
    #[serde(default)]
    pub person_tenure_type: Option<PersonTenureType>,
}

impl ToSource for HouseholdMember {
    fn to_source(&self) -> SourceValue {
        ObjectBuilder::new()
            .field("Id", &self.id)
            .field("Type", &self.member_type)
            .field("FullName", &self.full_name)
            .field("IsResponsible", &self.is_responsible)
            .field("DateOfBirth", &self.date_of_birth)
            .field("PersonTenureType", &self.person_tenure_type)
            .build()
    }
}

/// The kind of asset a tenure is held against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TenuredAssetType {
    Block,
    Concierge,
    Dwelling,
    LettableNonDwelling,
    MediumRiseBlock,
    #[serde(rename = "NA")]
    NotApplicable,
    TravellerSite,
}

impl TenuredAssetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TenuredAssetType::Block => "Block",
            TenuredAssetType::Concierge => "Concierge",
            TenuredAssetType::Dwelling => "Dwelling",
            TenuredAssetType::LettableNonDwelling => "LettableNonDwelling",
            TenuredAssetType::MediumRiseBlock => "MediumRiseBlock",
            TenuredAssetType::NotApplicable => "NA",
            TenuredAssetType::TravellerSite => "TravellerSite",
        }
    }
}

impl ToSource for TenuredAssetType {
    fn to_source(&self) -> SourceValue {
        SourceValue::String(self.as_str().to_string())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenuredAsset {
    pub id: Uuid,
    #[serde(rename = "type", default)]
    pub asset_type: Option<TenuredAssetType>,
    #[serde(default)]
    pub full_address: Option<String>,
    #[serde(default)]
    pub uprn: Option<String>,
    #[serde(default)]
    pub property_reference: Option<String>,
}

impl ToSource for TenuredAsset {
    fn to_source(&self) -> SourceValue {
        ObjectBuilder::new()
            .field("Id", &self.id)
            .field("Type", &self.asset_type)
            .field("FullAddress", &self.full_address)
            .field("Uprn", &self.uprn)
            .field("PropertyReference", &self.property_reference)
            .build()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenureType {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ToSource for TenureType {
    fn to_source(&self) -> SourceValue {
        ObjectBuilder::new()
            .field("Code", &self.code)
            .field("Description", &self.description)
            .build()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementType {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ToSource for AgreementType {
    fn to_source(&self) -> SourceValue {
        ObjectBuilder::new()
            .field("Code", &self.code)
            .field("Description", &self.description)
            .build()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Charges {
    #[serde(default)]
    pub rent: Option<f64>,
    #[serde(default)]
    pub current_balance: Option<f64>,
    #[serde(default)]
    pub billing_frequency: Option<String>,
    #[serde(default)]
    pub service_charge: Option<f64>,
    #[serde(default)]
    pub other_charges: Option<f64>,
    #[serde(default)]
    pub combined_rent_charges: Option<f64>,
    #[serde(default)]
    pub combined_service_charges: Option<f64>,
    #[serde(default)]
    pub tenancy_insurance_charge: Option<f64>,
    #[serde(default)]
    pub original_rent_charge: Option<f64>,
    #[serde(default)]
    pub original_service_charge: Option<f64>,
}

impl ToSource for Charges {
    fn to_source(&self) -> SourceValue {
        ObjectBuilder::new()
            .field("Rent", &self.rent)
            .field("CurrentBalance", &self.current_balance)
            .field("BillingFrequency", &self.billing_frequency)
            .field("ServiceCharge", &self.service_charge)
            .field("OtherCharges", &self.other_charges)
            .field("CombinedRentCharges", &self.combined_rent_charges)
            .field("CombinedServiceCharges", &self.combined_service_charges)
            .field("TenancyInsuranceCharge", &self.tenancy_insurance_charge)
            .field("OriginalRentCharge", &self.original_rent_charge)
            .field("OriginalServiceCharge", &self.original_service_charge)
            .build()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Terminated {
    #[serde(default)]
    pub is_terminated: Option<bool>,
    #[serde(default)]
    pub reason_for_termination: Option<String>,
}

impl ToSource for Terminated {
    fn to_source(&self) -> SourceValue {
        ObjectBuilder::new()
            .field("IsTerminated", &self.is_terminated)
            .field("ReasonForTermination", &self.reason_for_termination)
            .build()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    #[serde(rename = "type", default)]
    pub notice_type: Option<String>,
    #[serde(default)]
    pub served_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expiry_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub effective_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
}

impl ToSource for Notice {
    fn to_source(&self) -> SourceValue {
        ObjectBuilder::new()
            .field("Type", &self.notice_type)
            .field("ServedDate", &self.served_date)
            .field("ExpiryDate", &self.expiry_date)
            .field("EffectiveDate", &self.effective_date)
            .field("EndDate", &self.end_date)
            .build()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyReference {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl ToSource for LegacyReference {
    fn to_source(&self) -> SourceValue {
        ObjectBuilder::new()
            .field("Name", &self.name)
            .field("Value", &self.value)
            .build()
    }
}

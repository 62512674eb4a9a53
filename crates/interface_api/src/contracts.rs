//! Contract catalog
//!
//! Declares the web API contracts and the use case DTOs they are mapped to
//! and from. Names ending in `Dto`/`DTO` live on the use case side; the
//! plain names are the published contracts.

use core_kernel::{CoreError, TypeCatalog, TypeDescriptor, TypeRef};

fn named(name: &str) -> TypeRef {
    TypeRef::named(name)
}

fn list_of(name: &str) -> TypeRef {
    TypeRef::list(TypeRef::named(name))
}

/// Builds the catalog of every contract and DTO
///
/// # Errors
///
/// Returns an error if the declarations are inconsistent, which would be a
/// programming error in this module.
pub fn contract_catalog() -> Result<TypeCatalog, CoreError> {
    TypeCatalog::builder()
        .add_types(common_types())
        .add_types(account_value_types())
        .add_types(policy_types())
        .add_types(customer_types())
        .build()
}

fn common_types() -> Vec<TypeDescriptor> {
    vec![
        TypeDescriptor::class("AddressDto")
            .property("Line1", TypeRef::string())
            .property("Line2", TypeRef::string())
            .property("PostalCode", TypeRef::string())
            .property("Country", TypeRef::string())
            .property("AddressType", TypeRef::string()),
        TypeDescriptor::class("Address")
            .property("Line1", TypeRef::string())
            .property("Line2", TypeRef::string())
            .property("PostalCode", TypeRef::string())
            .property("Country", TypeRef::string()),
        TypeDescriptor::class("FileDto")
            .property("FileName", TypeRef::string())
            .property("ContentType", TypeRef::string())
            .property("Content", TypeRef::string()),
        TypeDescriptor::class("File")
            .property("FileName", TypeRef::string())
            .property("ContentType", TypeRef::string())
            .property("Content", TypeRef::string()),
        TypeDescriptor::class("ProductVersionDto")
            .property("Product", TypeRef::string())
            .property("Version", TypeRef::int32())
            .property("EffectiveFrom", TypeRef::date_time()),
        TypeDescriptor::class("ProductVersion")
            .property("Product", TypeRef::string())
            .property("Version", TypeRef::int32())
            .property("EffectiveFrom", TypeRef::date_time()),
        TypeDescriptor::class("AuthenticatedUser").property("UserName", TypeRef::string()),
        TypeDescriptor::class("UserDto")
            .property("Name", TypeRef::string())
            .property("Email", TypeRef::string()),
        TypeDescriptor::class("User")
            .property("Name", TypeRef::string())
            .property("Email", TypeRef::string())
            .property("Roles", TypeRef::list(TypeRef::string())),
    ]
}

fn account_value_types() -> Vec<TypeDescriptor> {
    vec![
        TypeDescriptor::enumeration("RecalculationStatus", ["Pending", "Completed", "Failed"]),
        TypeDescriptor::class("SaveSpecialQuoteFactorsRequest")
            .property("PolicyNumber", TypeRef::string())
            .property("PremiumCharge", TypeRef::decimal())
            .property("CoiChargeAdjustment", TypeRef::decimal())
            .property("MarketingAllowance", TypeRef::decimal())
            .property("OverfundCharge", TypeRef::decimal()),
        TypeDescriptor::class("SaveSpecialQuoteFactorsCommand")
            .property("PolicyNumber", TypeRef::string())
            .property("PremiumCharge", TypeRef::decimal())
            .property("CoiChargeAdjustment", TypeRef::decimal())
            .property("MarketingAllowance", TypeRef::decimal())
            .property("OverfundCharge", TypeRef::decimal()),
        TypeDescriptor::class("GetAccountValuesRecalculationRecordRequest")
            .property("PolicyNumber", TypeRef::string())
            .property("CurrentPage", TypeRef::int32())
            .property("PageSize", TypeRef::int32()),
        TypeDescriptor::class("GetAccountValuesRecalculationRecordsQuery")
            .property("PolicyNumber", TypeRef::string())
            .property("PageIndex", TypeRef::int32())
            .property("PageSize", TypeRef::int32())
            .property("Product", TypeRef::string()),
        TypeDescriptor::class("RecalculateAccountValuesRequest")
            .property("PolicyNumber", TypeRef::string())
            .property("EffectiveDate", TypeRef::date_time()),
        TypeDescriptor::class("RecalculateAccountValuesWithSpecificDateCommand")
            .property("PolicyNumber", TypeRef::string())
            .property("EffectiveDate", TypeRef::date_time())
            .property("Product", TypeRef::string()),
        TypeDescriptor::class("AccountValuesRecalculationRecordDto")
            .property("Id", TypeRef::guid())
            .property("RecalculatedOn", TypeRef::date_time())
            .property("Status", named("RecalculationStatus"))
            .property("RequestedBy", named("UserDto")),
        TypeDescriptor::class("AccountValuesRecalculationRecord")
            .property("Id", TypeRef::guid())
            .property("RecalculatedOn", TypeRef::date_time())
            .property("Status", named("RecalculationStatus"))
            .property("RequestedBy", named("User")),
        TypeDescriptor::class("GetAccountValuesRecalculationRecordResult")
            .property("Records", list_of("AccountValuesRecalculationRecordDto"))
            .property("TotalCount", TypeRef::int32()),
        TypeDescriptor::class("AccountValuesRecalculationRecordResult")
            .property("Records", list_of("AccountValuesRecalculationRecord"))
            .property("TotalCount", TypeRef::int32()),
        TypeDescriptor::class("AccountValuesRowDto")
            .property("PolicyNumber", TypeRef::string())
            .property("FundCode", TypeRef::string())
            .property("Units", TypeRef::decimal())
            .property("UnitPrice", TypeRef::decimal()),
        TypeDescriptor::class("AccountValuesRow")
            .property("PolicyNumber", TypeRef::string())
            .property("FundCode", TypeRef::string())
            .property("Units", TypeRef::decimal())
            .property("UnitPrice", TypeRef::decimal())
            .property("AccountValue", TypeRef::decimal()),
        TypeDescriptor::class("AccountValuesImportFileDto")
            .property("FileName", TypeRef::string())
            .property("ImportedOn", TypeRef::date_time())
            .property("Rows", list_of("AccountValuesRowDto")),
        TypeDescriptor::class("AccountValuesImportFile")
            .property("FileName", TypeRef::string())
            .property("ImportedOn", TypeRef::date_time())
            .property("Rows", list_of("AccountValuesRow")),
        TypeDescriptor::class("ImportAccountValuesRequest")
            .property("File", named("FileDto"))
            .property("ValuationDate", TypeRef::date_time()),
        TypeDescriptor::class("ImportAccountValuesCommand")
            .property("File", named("File"))
            .property("ValuationDate", TypeRef::date_time())
            .property("Product", TypeRef::string()),
    ]
}

fn policy_types() -> Vec<TypeDescriptor> {
    vec![
        TypeDescriptor::enumeration("PolicyStatus", ["Pending", "InForce", "Lapsed", "Surrendered"]),
        TypeDescriptor::class("PolicyTransactionRate")
            .property("GAPPRate", TypeRef::decimal())
            .property("IAOPRate", TypeRef::decimal())
            .property("GAOPRate", TypeRef::decimal()),
        TypeDescriptor::class("PolicyTransactionRateDto")
            .property("GAPPRate", TypeRef::decimal())
            .property("IAOPRate", TypeRef::decimal())
            .property("GAOPRate", TypeRef::decimal()),
        TypeDescriptor::class("SpecialQuoteFactorsDto")
            .property("PremiumCharge", TypeRef::decimal())
            .property("CoiChargeAdjustment", TypeRef::decimal())
            .property("OverfundCharge", TypeRef::decimal())
            .property("MarketingAllowance", TypeRef::decimal())
            .property("TransactionInterestRates", list_of("PolicyTransactionRateDto")),
        TypeDescriptor::class("SpecialQuoteFactors")
            .property("PremiumCharge", TypeRef::decimal())
            .property("CoiChargeAdjustment", TypeRef::decimal())
            .property("OverfundCharge", TypeRef::decimal())
            .property("MarketingAllowance", TypeRef::decimal())
            .property("TransactionInterestRates", list_of("PolicyTransactionRate")),
        TypeDescriptor::class("AgentDto")
            .property("Code", TypeRef::string())
            .property("Name", TypeRef::string()),
        TypeDescriptor::class("Agent")
            .property("Code", TypeRef::string())
            .property("Name", TypeRef::string())
            .property("Channel", TypeRef::string()),
        TypeDescriptor::class("GeneralInformationDTO")
            .property("ApplicationDate", TypeRef::date_time())
            .property("Currency", TypeRef::string())
            .property("Agent", named("AgentDto")),
        TypeDescriptor::class("GeneralInformation")
            .property("ApplicationDate", TypeRef::date_time())
            .property("Currency", TypeRef::string())
            .property("Agent", named("Agent")),
        TypeDescriptor::class("RiderDto")
            .property("Code", TypeRef::string())
            .property("SumAssured", TypeRef::decimal()),
        TypeDescriptor::class("Rider")
            .property("Code", TypeRef::string())
            .property("SumAssured", TypeRef::decimal()),
        TypeDescriptor::class("PlanDetailsDTO")
            .property("PlanCode", TypeRef::string())
            .property("SumAssured", TypeRef::decimal())
            .property("Riders", list_of("RiderDto")),
        TypeDescriptor::class("PlanDetail")
            .property("PlanCode", TypeRef::string())
            .property("SumAssured", TypeRef::decimal())
            .property("Riders", list_of("Rider")),
        TypeDescriptor::class("PolicyDespatchDTO")
            .property("DespatchDate", TypeRef::nullable(TypeRef::date_time()))
            .property("Method", TypeRef::string()),
        TypeDescriptor::class("PolicyDespatch")
            .property("DespatchDate", TypeRef::nullable(TypeRef::date_time()))
            .property("Method", TypeRef::string()),
        TypeDescriptor::class("PremiumAmountDto")
            .property("Amount", TypeRef::decimal())
            .property("Currency", TypeRef::string()),
        TypeDescriptor::class("PremiumAmount")
            .property("Amount", TypeRef::decimal())
            .property("Currency", TypeRef::string())
            .without_parameterless_constructor(),
        TypeDescriptor::class("CustomerSnapshotDTO")
            .property("CustomerId", TypeRef::guid())
            .property("Name", TypeRef::string())
            .property("ResidentialAddress", named("AddressDto")),
        TypeDescriptor::class("PolicyOwner")
            .property("CustomerId", TypeRef::guid())
            .property("Name", TypeRef::string())
            .property("ResidentialAddress", named("Address"))
            .property("Emails", TypeRef::list(TypeRef::string())),
        TypeDescriptor::class("QueriedPolicyDto")
            .property("PolicyNumber", TypeRef::string())
            .property("Status", named("PolicyStatus"))
            .property("GeneralInformation", named("GeneralInformationDTO"))
            .property("PlanDetails", named("PlanDetailsDTO"))
            .property("SpecialQuoteFactors", named("SpecialQuoteFactorsDto"))
            .property("Despatch", named("PolicyDespatchDTO"))
            .property("Premium", named("PremiumAmountDto"))
            .property("Owner", named("CustomerSnapshotDTO")),
        TypeDescriptor::class("Policy")
            .property("PolicyNumber", TypeRef::string())
            .property("Status", named("PolicyStatus"))
            .property("IsJointPolicyOwner", TypeRef::bool())
            .property("GeneralInformation", named("GeneralInformation"))
            .property("PlanDetails", named("PlanDetail"))
            .property("SpecialQuoteFactors", named("SpecialQuoteFactors"))
            .property("Despatch", named("PolicyDespatch"))
            .property("Premium", named("PremiumAmount"))
            .property("Owner", named("PolicyOwner")),
    ]
}

fn customer_types() -> Vec<TypeDescriptor> {
    vec![
        TypeDescriptor::class("DeleteOtherCustomerRequest").property("OtherCustomerId", TypeRef::guid()),
        TypeDescriptor::class("DeleteCustomerSnapshotCommand").property("CustomerSnapshotId", TypeRef::guid()),
        TypeDescriptor::class("EditOtherCustomerRequest")
            .property("OtherCustomerId", TypeRef::guid())
            .property("EditAllFields", TypeRef::bool())
            .property("Name", TypeRef::string())
            .property("RelationshipType", TypeRef::string())
            .property("IdType", TypeRef::string())
            .property("IdNumber", TypeRef::string())
            .property("ResidentialAddress", named("AddressDto")),
        TypeDescriptor::class("EditOtherCustomerCommand")
            .property("OtherCustomerId", TypeRef::guid())
            .property("Name", TypeRef::string())
            .property("RelationshipType", TypeRef::string())
            .property("IdType", TypeRef::string())
            .property("IdNumber", TypeRef::string())
            .property("ResidentialAddress", named("Address"))
            .property("UniqueCorrelationId", TypeRef::guid())
            .property("AuthenticatedUser", named("AuthenticatedUser")),
        TypeDescriptor::class("EditCustomerRequest")
            .property("CustomerId", TypeRef::guid())
            .property("Name", TypeRef::string())
            .property("Emails", TypeRef::list(TypeRef::string()))
            .property("ResidentialAddress", named("AddressDto")),
        TypeDescriptor::class("UpdateCustomerCommand")
            .property("CustomerId", TypeRef::guid())
            .property("Name", TypeRef::string())
            .property("Emails", TypeRef::list(TypeRef::string()))
            .property("ResidentialAddress", named("Address"))
            .property("UniqueCorrelationId", TypeRef::guid())
            .property("AuthenticatedUser", named("AuthenticatedUser")),
        TypeDescriptor::class("OrganisationDetailsDto")
            .property("Name", TypeRef::string())
            .property("RegistrationNumber", TypeRef::string())
            .property("RegisteredAddress", named("AddressDto")),
        TypeDescriptor::class("OrganisationDetails")
            .property("Name", TypeRef::string())
            .property("RegistrationNumber", TypeRef::string())
            .property("RegisteredAddress", named("Address")),
        TypeDescriptor::class("SimplifiedCustomer")
            .property("CustomerId", TypeRef::guid())
            .property("Name", TypeRef::string())
            .property("DateOfBirth", TypeRef::nullable(TypeRef::date_time())),
        TypeDescriptor::class("CustomerSummary")
            .property("CustomerId", TypeRef::guid())
            .property("Name", TypeRef::string())
            .property("DateOfBirth", TypeRef::nullable(TypeRef::date_time())),
        TypeDescriptor::class("CustomerPage")
            .property("Customers", list_of("SimplifiedCustomer"))
            .property("TotalCount", TypeRef::int32()),
        TypeDescriptor::class("SearchCustomerResult")
            .property("Customers", list_of("CustomerSummary"))
            .property("TotalCount", TypeRef::int32()),
    ]
}

//! Business impact factors.
//!
//! These depend on what matters to the business running the application;
//! the catalog provides the common ones from the methodology.

factor_enum! {
    /// How much financial damage will result from an exploit?
    FinancialDamage {
        LessThanTheCostToFixTheVulnerability = ("LESS_THAN_THE_COST_TO_FIX_THE_VULNERABILITY", 1),
        MinorEffectOnAnnualProfit = ("MINOR_EFFECT_ON_ANNUAL_PROFIT", 3),
        SignificantEffectOnAnnualProfit = ("SIGNIFICANT_EFFECT_ON_ANNUAL_PROFIT", 7),
        Bankruptcy = ("BANKRUPTCY", 9),
    }
}

factor_enum! {
    /// Would an exploit result in reputation damage that would harm the
    /// business?
    ReputationDamage {
        MinimalDamage = ("MINIMAL_DAMAGE", 1),
        LossOfMajorAccounts = ("LOSS_OF_MAJOR_ACCOUNTS", 4),
        LossOfGoodwill = ("LOSS_OF_GOODWILL", 5),
        BrandDamage = ("BRAND_DAMAGE", 9),
    }
}

factor_enum! {
    /// How much exposure does non-compliance introduce?
    NonCompliance {
        MinorViolation = ("MINOR_VIOLATION", 2),
        ClearViolation = ("CLEAR_VIOLATION", 5),
        HighProfileViolation = ("HIGH_PROFILE_VIOLATION", 7),
    }
}

factor_enum! {
    /// How much personally identifiable information could be disclosed?
    PrivacyViolation {
        OneIndividual = ("ONE_INDIVIDUAL", 3),
        HundredsOfPeople = ("HUNDREDS_OF_PEOPLE", 5),
        ThousandsOfPeople = ("THOUSANDS_OF_PEOPLE", 7),
        MillionsOfPeople = ("MILLIONS_OF_PEOPLE", 9),
    }
}

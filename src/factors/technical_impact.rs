//! Technical impact factors: the impact on the application, the data it
//! holds and the functions it provides.

factor_enum! {
    /// How much data could be disclosed and how sensitive is it?
    LossOfConfidentiality {
        MinimalNonSensitiveDataDisclosed = ("MINIMAL_NON_SENSITIVE_DATA_DISCLOSED", 2),
        MinimalCriticalDataDisclosed = ("MINIMAL_CRITICAL_DATA_DISCLOSED", 6),
        ExtensiveNonSensitiveDataDisclosed = ("EXTENSIVE_NON_SENSITIVE_DATA_DISCLOSED", 6),
        ExtensiveCriticalDataDisclosed = ("EXTENSIVE_CRITICAL_DATA_DISCLOSED", 7),
        AllDataDisclosed = ("ALL_DATA_DISCLOSED", 9),
    }
}

factor_enum! {
    /// How much data could be corrupted and how damaged is it?
    LossOfIntegrity {
        MinimalSlightlyCorruptData = ("MINIMAL_SLIGHTLY_CORRUPT_DATA", 1),
        MinimalSeriouslyCorruptData = ("MINIMAL_SERIOUSLY_CORRUPT_DATA", 3),
        ExtensiveSlightlyCorruptData = ("EXTENSIVE_SLIGHTLY_CORRUPT_DATA", 5),
        ExtensiveSeriouslyCorruptData = ("EXTENSIVE_SERIOUSLY_CORRUPT_DATA", 7),
        AllDataTotallyCorrupt = ("ALL_DATA_TOTALLY_CORRUPT", 9),
    }
}

factor_enum! {
    /// How much service could be lost and how vital is it?
    LossOfAvailability {
        MinimalSecondaryServicesInterrupted = ("MINIMAL_SECONDARY_SERVICES_INTERRUPTED", 1),
        MinimalPrimaryServicesInterrupted = ("MINIMAL_PRIMARY_SERVICES_INTERRUPTED", 5),
        ExtensiveSecondaryServicesInterrupted = ("EXTENSIVE_SECONDARY_SERVICES_INTERRUPTED", 5),
        ExtensivePrimaryServicesInterrupted = ("EXTENSIVE_PRIMARY_SERVICES_INTERRUPTED", 7),
        AllServicesCompletelyLost = ("ALL_SERVICES_COMPLETELY_LOST", 9),
    }
}

factor_enum! {
    /// Are the threat agents' actions traceable to an individual?
    LossOfAccountability {
        FullyTraceable = ("FULLY_TRACEABLE", 1),
        PossiblyTraceable = ("POSSIBLY_TRACEABLE", 7),
        CompletelyAnonymous = ("COMPLETELY_ANONYMOUS", 9),
    }
}

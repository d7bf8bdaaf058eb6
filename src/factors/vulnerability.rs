//! Vulnerability factors.
//!
//! Estimate the likelihood of the particular vulnerability being discovered
//! and exploited, assuming the threat agent selected above.

factor_enum! {
    /// How easy is it for this group of threat agents to discover the
    /// vulnerability?
    EaseOfDiscovery {
        PracticallyImpossible = ("PRACTICALLY_IMPOSSIBLE", 1),
        Difficult = ("DIFFICULT", 3),
        Easy = ("EASY", 7),
        AutomatedToolsAvailable = ("AUTOMATED_TOOLS_AVAILABLE", 9),
    }
}

factor_enum! {
    /// How easy is it for this group of threat agents to actually exploit the
    /// vulnerability?
    EaseOfExploit {
        Theoretical = ("THEORETICAL", 1),
        Difficult = ("DIFFICULT", 3),
        Easy = ("EASY", 5),
        AutomatedToolsAvailable = ("AUTOMATED_TOOLS_AVAILABLE", 9),
    }
}

factor_enum! {
    /// How well known is the vulnerability to this group of threat agents?
    Awareness {
        Unknown = ("UNKNOWN", 1),
        Hidden = ("HIDDEN", 4),
        Obvious = ("OBVIOUS", 6),
        PublicKnowledge = ("PUBLIC_KNOWLEDGE", 9),
    }
}

factor_enum! {
    /// How likely is an exploit to be detected?
    IntrusionDetection {
        ActiveDetectionInApplication = ("ACTIVE_DETECTION_IN_APPLICATION", 1),
        ActiveDetectionInInfrastructure = ("ACTIVE_DETECTION_IN_INFRASTRUCTURE", 3),
        LoggedAndReviewed = ("LOGGED_AND_REVIEWED", 8),
        NotLogged = ("NOT_LOGGED", 9),
    }
}

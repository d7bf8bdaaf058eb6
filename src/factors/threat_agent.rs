//! Threat agent factors.
//!
//! Estimate the likelihood of a successful attack by the group of threat
//! agents involved. Rate the worst-case threat agent.

factor_enum! {
    /// How technically skilled is this group of threat agents?
    SkillLevel {
        NoTechnicalSkills = ("NO_TECHNICAL_SKILLS", 1),
        SomeTechnicalSkills = ("SOME_TECHNICAL_SKILLS", 3),
        AdvancedComputerUser = ("ADVANCED_COMPUTER_USER", 5),
        NetworkAndProgrammingSkills = ("NETWORK_AND_PROGRAMMING_SKILLS", 6),
        SecurityPenetrationSkills = ("SECURITY_PENETRATION_SKILLS", 9),
    }
}

factor_enum! {
    /// How motivated is this group of threat agents to find and exploit the
    /// vulnerability?
    Motive {
        LowOrNoReward = ("LOW_OR_NO_REWARD", 1),
        PossibleReward = ("POSSIBLE_REWARD", 4),
        HighReward = ("HIGH_REWARD", 9),
    }
}

factor_enum! {
    /// What resources and opportunities does this group need to find and
    /// exploit the vulnerability?
    Opportunity {
        FullAccessOrExpensiveResourcesRequired = ("FULL_ACCESS_OR_EXPENSIVE_RESOURCES_REQUIRED", 0),
        SpecialAccessOrResourcesRequired = ("SPECIAL_ACCESS_OR_RESOURCES_REQUIRED", 4),
        SomeAccessOrResourcesRequired = ("SOME_ACCESS_OR_RESOURCES_REQUIRED", 7),
        NoAccessOrResourcesRequired = ("NO_ACCESS_OR_RESOURCES_REQUIRED", 9),
    }
}

factor_enum! {
    /// How large is this group of threat agents?
    Size {
        Developers = ("DEVELOPERS", 2),
        SystemAdministrators = ("SYSTEM_ADMINISTRATORS", 2),
        IntranetUsers = ("INTRANET_USERS", 4),
        Partners = ("PARTNERS", 5),
        AuthenticatedUsers = ("AUTHENTICATED_USERS", 6),
        AnonymousInternetUsers = ("ANONYMOUS_INTERNET_USERS", 9),
    }
}

//! Permission Catalog
//!
//! Every grantable capability on the platform, including the guards of the
//! page, action and feature sub-catalogs. Each permission belongs to exactly
//! one [`PermissionCategory`] for display purposes.

use super::macros::string_catalog;

string_catalog! {
    /// Presentation grouping of permissions
    pub enum PermissionCategory {
        Content = "content",
        Learning = "learning",
        Training = "training",
        Communication = "communication",
        Analytics = "analytics",
        System = "system",
        Audit = "audit",
    }
}

string_catalog! {
    /// A single grantable capability
    pub enum Permission {
        // Authentication & basic access
        LoginSso = "LOGIN_SSO",

        // Learning & education
        SearchResources = "SEARCH_RESOURCES",
        WatchVideos = "WATCH_VIDEOS",
        DownloadResources = "DOWNLOAD_RESOURCES",
        EnrollCourses = "ENROLL_COURSES",
        CompleteModules = "COMPLETE_MODULES",
        TakeQuizzes = "TAKE_QUIZZES",
        TrackProgress = "TRACK_PROGRESS",
        DownloadCertificates = "DOWNLOAD_CERTIFICATES",
        AccessHelp = "ACCESS_HELP",

        // Internal staff
        AccessInternalTraining = "ACCESS_INTERNAL_TRAINING",
        ViewStaffMaterials = "VIEW_STAFF_MATERIALS",
        TrackCompliance = "TRACK_COMPLIANCE",

        // Content management
        UploadContent = "UPLOAD_CONTENT",
        CreateResources = "CREATE_RESOURCES",
        UpdateResources = "UPDATE_RESOURCES",
        ArchiveContent = "ARCHIVE_CONTENT",
        DeleteContent = "DELETE_CONTENT",
        ManageMetadata = "MANAGE_METADATA",
        VersionControl = "VERSION_CONTROL",

        // Training management
        ScheduleWebinars = "SCHEDULE_WEBINARS",
        ManageWebinars = "MANAGE_WEBINARS",
        CreateCourses = "CREATE_COURSES",
        ManageCourses = "MANAGE_COURSES",
        AddModules = "ADD_MODULES",
        CreateQuizzes = "CREATE_QUIZZES",
        MonitorEnrollment = "MONITOR_ENROLLMENT",
        TrackAttendance = "TRACK_ATTENDANCE",

        // Communication
        CreateCampaigns = "CREATE_CAMPAIGNS",
        SendEmail = "SEND_EMAIL",
        SendSms = "SEND_SMS",
        TargetAudience = "TARGET_AUDIENCE",
        ScheduleMessages = "SCHEDULE_MESSAGES",
        TrackDelivery = "TRACK_DELIVERY",
        ViewCampaignStats = "VIEW_CAMPAIGN_STATS",

        // Analytics & reporting
        ViewAnalytics = "VIEW_ANALYTICS",
        ViewUserStats = "VIEW_USER_STATS",
        ViewCompletionRates = "VIEW_COMPLETION_RATES",
        ViewSatisfactionScores = "VIEW_SATISFACTION_SCORES",
        ExportReports = "EXPORT_REPORTS",
        FilterReports = "FILTER_REPORTS",
        ViewTrends = "VIEW_TRENDS",

        // System administration
        ManageUsers = "MANAGE_USERS",
        AssignRoles = "ASSIGN_ROLES",
        ControlAccess = "CONTROL_ACCESS",
        SystemMaintenance = "SYSTEM_MAINTENANCE",
        ManageSso = "MANAGE_SSO",
        ArchiveOldContent = "ARCHIVE_OLD_CONTENT",
        MonitorLogs = "MONITOR_LOGS",
        SyncRecords = "SYNC_RECORDS",

        // Auditing
        AuditSystem = "AUDIT_SYSTEM",
        ViewAuditLogs = "VIEW_AUDIT_LOGS",
        ComplianceMonitoring = "COMPLIANCE_MONITORING",
        SecurityReview = "SECURITY_REVIEW",
        GenerateAuditReports = "GENERATE_AUDIT_REPORTS",

        // Action guards
        UploadFile = "UPLOAD_FILE",
        EditResource = "EDIT_RESOURCE",
        DeleteResource = "DELETE_RESOURCE",
        ViewResourceHistory = "VIEW_RESOURCE_HISTORY",
        CreateCourse = "CREATE_COURSE",
        EditCourse = "EDIT_COURSE",
        PublishCourse = "PUBLISH_COURSE",
        ViewEnrollments = "VIEW_ENROLLMENTS",
        CreateUser = "CREATE_USER",
        EditUser = "EDIT_USER",
        DeactivateUser = "DEACTIVATE_USER",
        ViewUserActivity = "VIEW_USER_ACTIVITY",
        CreateWebinar = "CREATE_WEBINAR",
        EditWebinar = "EDIT_WEBINAR",
        CancelWebinar = "CANCEL_WEBINAR",
        ViewWebinarAttendance = "VIEW_WEBINAR_ATTENDANCE",
        CreateCampaign = "CREATE_CAMPAIGN",
        ScheduleNotification = "SCHEDULE_NOTIFICATION",
        ViewRealTimeAnalytics = "VIEW_REAL_TIME_ANALYTICS",
        ExportData = "EXPORT_DATA",
        ViewFinancialReports = "VIEW_FINANCIAL_REPORTS",
        ManageSystemSettings = "MANAGE_SYSTEM_SETTINGS",
        ViewSystemHealth = "VIEW_SYSTEM_HEALTH",
        CreateHelpContent = "CREATE_HELP_CONTENT",
        EditHelpContent = "EDIT_HELP_CONTENT",
        ViewHelpAnalytics = "VIEW_HELP_ANALYTICS",

        // Page guards
        AccessAdminDashboard = "ACCESS_ADMIN_DASHBOARD",
        AccessUserManagement = "ACCESS_USER_MANAGEMENT",
        AccessRoleManagement = "ACCESS_ROLE_MANAGEMENT",
        AccessContentManagement = "ACCESS_CONTENT_MANAGEMENT",
        AccessCourseManagement = "ACCESS_COURSE_MANAGEMENT",
        AccessWebinarManagement = "ACCESS_WEBINAR_MANAGEMENT",
        AccessNotificationCenter = "ACCESS_NOTIFICATION_CENTER",
        AccessAnalyticsDashboard = "ACCESS_ANALYTICS_DASHBOARD",
        AccessSystemSettings = "ACCESS_SYSTEM_SETTINGS",
        AccessAuditLogs = "ACCESS_AUDIT_LOGS",
        AccessTaxpayerDashboard = "ACCESS_TAXPAYER_DASHBOARD",
        AccessCourseCatalog = "ACCESS_COURSE_CATALOG",
        AccessResourceLibrary = "ACCESS_RESOURCE_LIBRARY",
        AccessCertificates = "ACCESS_CERTIFICATES",
        AccessProfile = "ACCESS_PROFILE",
        AccessHelpCenter = "ACCESS_HELP_CENTER",
        AccessReports = "ACCESS_REPORTS",
        AccessSettings = "ACCESS_SETTINGS",

        // Feature guards
        AdvancedAnalytics = "ADVANCED_ANALYTICS",
        BulkActions = "BULK_ACTIONS",
        ApiAccess = "API_ACCESS",
        RealTimeUpdates = "REAL_TIME_UPDATES",
        MobileAccess = "MOBILE_ACCESS",
        OfflineMode = "OFFLINE_MODE",
        MultiLanguage = "MULTI_LANGUAGE",
        DarkMode = "DARK_MODE",
    }
}

impl Permission {
    /// Display category of this permission
    pub const fn category(&self) -> PermissionCategory {
        use Permission::*;

        match self {
            UploadContent | CreateResources | UpdateResources | ArchiveContent | DeleteContent
            | ManageMetadata | VersionControl | UploadFile | EditResource | DeleteResource
            | ViewResourceHistory | CreateHelpContent | EditHelpContent
            | AccessContentManagement => PermissionCategory::Content,

            SearchResources | WatchVideos | DownloadResources | EnrollCourses | CompleteModules
            | TakeQuizzes | TrackProgress | DownloadCertificates | AccessHelp
            | AccessInternalTraining | ViewStaffMaterials | TrackCompliance
            | AccessTaxpayerDashboard | AccessCourseCatalog | AccessResourceLibrary
            | AccessCertificates | AccessProfile | AccessHelpCenter | MobileAccess | OfflineMode
            | MultiLanguage | DarkMode => PermissionCategory::Learning,

            ScheduleWebinars | ManageWebinars | CreateCourses | ManageCourses | AddModules
            | CreateQuizzes | MonitorEnrollment | TrackAttendance | CreateCourse | EditCourse
            | PublishCourse | ViewEnrollments | CreateWebinar | EditWebinar | CancelWebinar
            | ViewWebinarAttendance | AccessCourseManagement | AccessWebinarManagement => {
                PermissionCategory::Training
            }

            CreateCampaigns | SendEmail | SendSms | TargetAudience | ScheduleMessages
            | TrackDelivery | ViewCampaignStats | CreateCampaign | ScheduleNotification
            | AccessNotificationCenter | RealTimeUpdates => PermissionCategory::Communication,

            ViewAnalytics | ViewUserStats | ViewCompletionRates | ViewSatisfactionScores
            | ExportReports | FilterReports | ViewTrends | ViewRealTimeAnalytics | ExportData
            | ViewFinancialReports | ViewHelpAnalytics | AccessAnalyticsDashboard | AccessReports
            | AdvancedAnalytics => PermissionCategory::Analytics,

            LoginSso | ManageUsers | AssignRoles | ControlAccess | SystemMaintenance | ManageSso
            | ArchiveOldContent | MonitorLogs | SyncRecords | CreateUser | EditUser
            | DeactivateUser | ManageSystemSettings | ViewSystemHealth | AccessAdminDashboard
            | AccessUserManagement | AccessRoleManagement | AccessSystemSettings | AccessSettings
            | BulkActions | ApiAccess => PermissionCategory::System,

            AuditSystem | ViewAuditLogs | ComplianceMonitoring | SecurityReview
            | GenerateAuditReports | ViewUserActivity | AccessAuditLogs => PermissionCategory::Audit,
        }
    }

    /// Human-readable description
    pub const fn description(&self) -> &'static str {
        use Permission::*;

        match self {
            LoginSso => "Sign in through single sign-on",
            SearchResources => "Search the resource library",
            WatchVideos => "Watch educational videos",
            DownloadResources => "Download resources",
            EnrollCourses => "Enroll in courses",
            CompleteModules => "Complete course modules",
            TakeQuizzes => "Take module quizzes",
            TrackProgress => "Track personal learning progress",
            DownloadCertificates => "Download earned certificates",
            AccessHelp => "Access help and support",
            AccessInternalTraining => "Access internal staff training",
            ViewStaffMaterials => "View staff-only materials",
            TrackCompliance => "Track training compliance",
            UploadContent => "Upload new educational resources",
            CreateResources => "Create resources",
            UpdateResources => "Update existing resources",
            ArchiveContent => "Archive old resources",
            DeleteContent => "Delete content",
            ManageMetadata => "Manage resource metadata",
            VersionControl => "Manage resource versions",
            ScheduleWebinars => "Schedule new webinars",
            ManageWebinars => "Manage existing webinars",
            CreateCourses => "Create courses",
            ManageCourses => "Manage existing courses",
            AddModules => "Add modules to courses",
            CreateQuizzes => "Create quizzes",
            MonitorEnrollment => "Monitor course enrollment",
            TrackAttendance => "Track webinar attendance",
            CreateCampaigns => "Create communication campaigns",
            SendEmail => "Send email notifications",
            SendSms => "Send SMS notifications",
            TargetAudience => "Target campaign audiences",
            ScheduleMessages => "Schedule outgoing messages",
            TrackDelivery => "Track message delivery",
            ViewCampaignStats => "View campaign statistics",
            ViewAnalytics => "View analytics dashboard",
            ViewUserStats => "View user statistics",
            ViewCompletionRates => "View course completion rates",
            ViewSatisfactionScores => "View satisfaction scores",
            ExportReports => "Export reports and data",
            FilterReports => "Filter reports",
            ViewTrends => "View usage trends",
            ManageUsers => "Manage user accounts",
            AssignRoles => "Assign roles to users",
            ControlAccess => "Control access policies",
            SystemMaintenance => "Perform system maintenance",
            ManageSso => "Configure single sign-on",
            ArchiveOldContent => "Archive outdated content",
            MonitorLogs => "Monitor system logs",
            SyncRecords => "Synchronize records with external systems",
            AuditSystem => "Audit system usage",
            ViewAuditLogs => "View audit logs",
            ComplianceMonitoring => "Monitor compliance",
            SecurityReview => "Review security events",
            GenerateAuditReports => "Generate audit reports",
            UploadFile => "Upload a file",
            EditResource => "Edit a resource",
            DeleteResource => "Delete a resource",
            ViewResourceHistory => "View a resource's version history",
            CreateCourse => "Create a course",
            EditCourse => "Edit a course",
            PublishCourse => "Publish a course",
            ViewEnrollments => "View course enrollments",
            CreateUser => "Create a user",
            EditUser => "Edit a user",
            DeactivateUser => "Deactivate a user",
            ViewUserActivity => "View user activity",
            CreateWebinar => "Create a webinar",
            EditWebinar => "Edit a webinar",
            CancelWebinar => "Cancel a webinar",
            ViewWebinarAttendance => "View webinar attendance",
            CreateCampaign => "Create a campaign",
            ScheduleNotification => "Schedule a notification",
            ViewRealTimeAnalytics => "View real-time analytics",
            ExportData => "Export data",
            ViewFinancialReports => "View financial reports",
            ManageSystemSettings => "Manage system settings",
            ViewSystemHealth => "View system health",
            CreateHelpContent => "Create help content",
            EditHelpContent => "Edit help content",
            ViewHelpAnalytics => "View help center analytics",
            AccessAdminDashboard => "Open the admin dashboard",
            AccessUserManagement => "Open user management",
            AccessRoleManagement => "Open role management",
            AccessContentManagement => "Open content management",
            AccessCourseManagement => "Open course management",
            AccessWebinarManagement => "Open webinar management",
            AccessNotificationCenter => "Open the notification center",
            AccessAnalyticsDashboard => "Open the analytics dashboard",
            AccessSystemSettings => "Open system settings",
            AccessAuditLogs => "Open the audit log viewer",
            AccessTaxpayerDashboard => "Open the taxpayer dashboard",
            AccessCourseCatalog => "Open the course catalog",
            AccessResourceLibrary => "Open the resource library",
            AccessCertificates => "Open certificates",
            AccessProfile => "Open the user profile",
            AccessHelpCenter => "Open the help center",
            AccessReports => "Open reports",
            AccessSettings => "Open personal settings",
            AdvancedAnalytics => "Use advanced analytics",
            BulkActions => "Use bulk actions",
            ApiAccess => "Use the API",
            RealTimeUpdates => "Receive real-time updates",
            MobileAccess => "Use the mobile client",
            OfflineMode => "Use offline mode",
            MultiLanguage => "Switch interface language",
            DarkMode => "Use dark mode",
        }
    }
}

/// Description for a raw identifier; unknown identifiers get a placeholder
pub fn permission_description(id: &str) -> &'static str {
    Permission::from_id(id)
        .map(|permission| permission.description())
        .unwrap_or("No description available")
}

/// Whether `id` names a permission in the catalog
pub fn is_valid_permission(id: &str) -> bool {
    Permission::from_id(id).is_some()
}

//! Page, action and feature sub-catalogs
//!
//! Each entry is guarded by exactly one [`Permission`]; the aggregation layer
//! lists the entries whose guard is granted.

use super::macros::string_catalog;
use super::permission::Permission;

string_catalog! {
    /// Navigable page of the portal
    pub enum PageId {
        AdminDashboard = "ACCESS_ADMIN_DASHBOARD",
        UserManagement = "ACCESS_USER_MANAGEMENT",
        RoleManagement = "ACCESS_ROLE_MANAGEMENT",
        ContentManagement = "ACCESS_CONTENT_MANAGEMENT",
        CourseManagement = "ACCESS_COURSE_MANAGEMENT",
        WebinarManagement = "ACCESS_WEBINAR_MANAGEMENT",
        NotificationCenter = "ACCESS_NOTIFICATION_CENTER",
        AnalyticsDashboard = "ACCESS_ANALYTICS_DASHBOARD",
        SystemSettings = "ACCESS_SYSTEM_SETTINGS",
        AuditLogs = "ACCESS_AUDIT_LOGS",
        TaxpayerDashboard = "ACCESS_TAXPAYER_DASHBOARD",
        CourseCatalog = "ACCESS_COURSE_CATALOG",
        ResourceLibrary = "ACCESS_RESOURCE_LIBRARY",
        Certificates = "ACCESS_CERTIFICATES",
        Profile = "ACCESS_PROFILE",
        HelpCenter = "ACCESS_HELP_CENTER",
        Reports = "ACCESS_REPORTS",
        Settings = "ACCESS_SETTINGS",
    }
}

impl PageId {
    /// Permission guarding this page
    pub const fn permission(&self) -> Permission {
        match self {
            PageId::AdminDashboard => Permission::AccessAdminDashboard,
            PageId::UserManagement => Permission::AccessUserManagement,
            PageId::RoleManagement => Permission::AccessRoleManagement,
            PageId::ContentManagement => Permission::AccessContentManagement,
            PageId::CourseManagement => Permission::AccessCourseManagement,
            PageId::WebinarManagement => Permission::AccessWebinarManagement,
            PageId::NotificationCenter => Permission::AccessNotificationCenter,
            PageId::AnalyticsDashboard => Permission::AccessAnalyticsDashboard,
            PageId::SystemSettings => Permission::AccessSystemSettings,
            PageId::AuditLogs => Permission::AccessAuditLogs,
            PageId::TaxpayerDashboard => Permission::AccessTaxpayerDashboard,
            PageId::CourseCatalog => Permission::AccessCourseCatalog,
            PageId::ResourceLibrary => Permission::AccessResourceLibrary,
            PageId::Certificates => Permission::AccessCertificates,
            PageId::Profile => Permission::AccessProfile,
            PageId::HelpCenter => Permission::AccessHelpCenter,
            PageId::Reports => Permission::AccessReports,
            PageId::Settings => Permission::AccessSettings,
        }
    }
}

string_catalog! {
    /// Executable action exposed in the UI
    pub enum ActionId {
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
        ViewCampaignStats = "VIEW_CAMPAIGN_STATS",
        ViewRealTimeAnalytics = "VIEW_REAL_TIME_ANALYTICS",
        ExportData = "EXPORT_DATA",
        ViewFinancialReports = "VIEW_FINANCIAL_REPORTS",
        ViewAuditLogs = "VIEW_AUDIT_LOGS",
        ManageSystemSettings = "MANAGE_SYSTEM_SETTINGS",
        ViewSystemHealth = "VIEW_SYSTEM_HEALTH",
        CreateHelpContent = "CREATE_HELP_CONTENT",
        EditHelpContent = "EDIT_HELP_CONTENT",
        ViewHelpAnalytics = "VIEW_HELP_ANALYTICS",
    }
}

impl ActionId {
    /// Permission guarding this action
    pub const fn permission(&self) -> Permission {
        match self {
            ActionId::UploadFile => Permission::UploadFile,
            ActionId::EditResource => Permission::EditResource,
            ActionId::DeleteResource => Permission::DeleteResource,
            ActionId::ViewResourceHistory => Permission::ViewResourceHistory,
            ActionId::CreateCourse => Permission::CreateCourse,
            ActionId::EditCourse => Permission::EditCourse,
            ActionId::PublishCourse => Permission::PublishCourse,
            ActionId::ViewEnrollments => Permission::ViewEnrollments,
            ActionId::CreateUser => Permission::CreateUser,
            ActionId::EditUser => Permission::EditUser,
            ActionId::DeactivateUser => Permission::DeactivateUser,
            ActionId::ViewUserActivity => Permission::ViewUserActivity,
            ActionId::CreateWebinar => Permission::CreateWebinar,
            ActionId::EditWebinar => Permission::EditWebinar,
            ActionId::CancelWebinar => Permission::CancelWebinar,
            ActionId::ViewWebinarAttendance => Permission::ViewWebinarAttendance,
            ActionId::CreateCampaign => Permission::CreateCampaign,
            ActionId::ScheduleNotification => Permission::ScheduleNotification,
            // Shared with the communication officer's base grant
            ActionId::ViewCampaignStats => Permission::ViewCampaignStats,
            ActionId::ViewRealTimeAnalytics => Permission::ViewRealTimeAnalytics,
            ActionId::ExportData => Permission::ExportData,
            ActionId::ViewFinancialReports => Permission::ViewFinancialReports,
            // Shared with the auditor's base grant
            ActionId::ViewAuditLogs => Permission::ViewAuditLogs,
            ActionId::ManageSystemSettings => Permission::ManageSystemSettings,
            ActionId::ViewSystemHealth => Permission::ViewSystemHealth,
            ActionId::CreateHelpContent => Permission::CreateHelpContent,
            ActionId::EditHelpContent => Permission::EditHelpContent,
            ActionId::ViewHelpAnalytics => Permission::ViewHelpAnalytics,
        }
    }
}

string_catalog! {
    /// Optional product feature
    pub enum FeatureId {
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

impl FeatureId {
    /// Permission guarding this feature
    pub const fn permission(&self) -> Permission {
        match self {
            FeatureId::AdvancedAnalytics => Permission::AdvancedAnalytics,
            FeatureId::BulkActions => Permission::BulkActions,
            FeatureId::ApiAccess => Permission::ApiAccess,
            FeatureId::RealTimeUpdates => Permission::RealTimeUpdates,
            FeatureId::MobileAccess => Permission::MobileAccess,
            FeatureId::OfflineMode => Permission::OfflineMode,
            FeatureId::MultiLanguage => Permission::MultiLanguage,
            FeatureId::DarkMode => Permission::DarkMode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guards_share_identifiers() {
        // Sub-catalog ids are the ids of their guarding permissions
        for page in PageId::ALL {
            assert_eq!(page.as_str(), page.permission().as_str());
        }
        for action in ActionId::ALL {
            assert_eq!(action.as_str(), action.permission().as_str());
        }
        for feature in FeatureId::ALL {
            assert_eq!(feature.as_str(), feature.permission().as_str());
        }
    }

    #[test]
    fn test_sub_catalog_sizes() {
        assert_eq!(PageId::ALL.len(), 18);
        assert_eq!(ActionId::ALL.len(), 28);
        assert_eq!(FeatureId::ALL.len(), 8);
    }
}

//! Compiled-in declarations for the ITAS portal
//!
//! Typed so that the product tables cannot name identifiers outside the
//! catalogs. [`RegistryDefinition::builtin`](crate::RegistryDefinition::builtin)
//! turns them into a definition, which then goes through the same startup
//! validation as any externally supplied one.

use crate::catalog::{Permission, Role};

use Permission::*;

const TAXPAYER_GRANTS: &[Permission] = &[
    LoginSso,
    SearchResources,
    WatchVideos,
    DownloadResources,
    EnrollCourses,
    CompleteModules,
    TakeQuizzes,
    TrackProgress,
    DownloadCertificates,
    AccessHelp,
];

const MOR_STAFF_GRANTS: &[Permission] = &[
    LoginSso,
    SearchResources,
    WatchVideos,
    DownloadResources,
    EnrollCourses,
    CompleteModules,
    TakeQuizzes,
    TrackProgress,
    DownloadCertificates,
    AccessHelp,
    AccessInternalTraining,
    ViewStaffMaterials,
    TrackCompliance,
];

const CONTENT_ADMIN_GRANTS: &[Permission] = &[
    LoginSso,
    SearchResources,
    UploadContent,
    CreateResources,
    UpdateResources,
    ArchiveContent,
    DeleteContent,
    ManageMetadata,
    VersionControl,
    DownloadResources,
];

const TRAINING_ADMIN_GRANTS: &[Permission] = &[
    LoginSso,
    ScheduleWebinars,
    ManageWebinars,
    CreateCourses,
    ManageCourses,
    AddModules,
    CreateQuizzes,
    MonitorEnrollment,
    TrackAttendance,
    SearchResources,
];

const COMM_OFFICER_GRANTS: &[Permission] = &[
    LoginSso,
    CreateCampaigns,
    SendEmail,
    SendSms,
    TargetAudience,
    ScheduleMessages,
    TrackDelivery,
    ViewCampaignStats,
];

const MANAGER_GRANTS: &[Permission] = &[
    LoginSso,
    ViewAnalytics,
    ViewUserStats,
    ViewCompletionRates,
    ViewSatisfactionScores,
    ExportReports,
    FilterReports,
    ViewTrends,
];

// Explicit list; the administrator is not a wildcard.
const SYSTEM_ADMIN_GRANTS: &[Permission] = &[
    LoginSso,
    ManageUsers,
    AssignRoles,
    ControlAccess,
    SystemMaintenance,
    ManageSso,
    ArchiveOldContent,
    MonitorLogs,
    SyncRecords,
    SearchResources,
    ViewAnalytics,
    ExportReports,
];

const AUDITOR_GRANTS: &[Permission] = &[
    LoginSso,
    AuditSystem,
    ViewAuditLogs,
    ComplianceMonitoring,
    SecurityReview,
    GenerateAuditReports,
    ViewAnalytics,
    ExportReports,
];

/// Grant set of every role
pub const GRANTS: &[(Role, &[Permission])] = &[
    (Role::Taxpayer, TAXPAYER_GRANTS),
    (Role::MorStaff, MOR_STAFF_GRANTS),
    (Role::ContentAdmin, CONTENT_ADMIN_GRANTS),
    (Role::TrainingAdmin, TRAINING_ADMIN_GRANTS),
    (Role::CommOfficer, COMM_OFFICER_GRANTS),
    (Role::Manager, MANAGER_GRANTS),
    (Role::SystemAdmin, SYSTEM_ADMIN_GRANTS),
    (Role::Auditor, AUDITOR_GRANTS),
];

/// Accessible route patterns of every role
pub const ROUTES: &[(Role, &[&str])] = &[
    (
        Role::Taxpayer,
        &[
            "/taxpayer/dashboard",
            "/taxpayer/courses",
            "/taxpayer/course/{id}",
            "/taxpayer/resources",
            "/profile",
        ],
    ),
    (
        Role::MorStaff,
        &[
            "/staff/dashboard",
            "/staff/internal-training",
            "/staff/courses",
            "/staff/progress",
            "/staff/assessments",
            "/staff/certificates",
            "/staff/compliance",
            "/staff/resources",
            "/staff/help",
            "/profile",
        ],
    ),
    (
        Role::ContentAdmin,
        &[
            "/admin/content-dashboard",
            "/admin/upload-resource",
            "/admin/resource-version",
            "/admin/resources",
            "/profile",
        ],
    ),
    (
        Role::TrainingAdmin,
        &[
            "/admin/training-dashboard",
            "/admin/webinar-management",
            "/admin/webinars",
            "/profile",
        ],
    ),
    (
        Role::CommOfficer,
        &["/admin/comm-dashboard", "/admin/notification-center", "/profile"],
    ),
    (
        Role::Manager,
        &["/admin/manager-dashboard", "/admin/analytics", "/profile"],
    ),
    (
        Role::SystemAdmin,
        &[
            "/admin/system-dashboard",
            "/admin/user-role-management",
            "/admin/analytics",
            "/profile",
        ],
    ),
    (
        Role::Auditor,
        &["/admin/auditor-dashboard", "/admin/analytics", "/profile"],
    ),
];

/// One compiled-in menu entry: label, path, icon, restriction
pub type MenuEntry = (&'static str, &'static str, &'static str, Option<&'static [Role]>);

/// Menu sections: name, audience, items
pub const MENUS: &[(&str, &[Role], &[MenuEntry])] = &[
    (
        "taxpayer",
        &[Role::Taxpayer],
        &[
            ("Dashboard", "/taxpayer/dashboard", "Dashboard", None),
            ("Courses", "/taxpayer/courses", "School", None),
            ("Resources", "/taxpayer/resources", "Description", None),
            ("Certificates", "/taxpayer/certificates", "Verified", None),
            ("Profile", "/profile", "Person", None),
        ],
    ),
    (
        "staff",
        &[Role::MorStaff],
        &[
            ("Dashboard", "/staff/dashboard", "Dashboard", None),
            ("Internal Training", "/staff/internal-training", "Business", None),
            ("Courses", "/staff/courses", "School", None),
            ("Progress", "/staff/progress", "TrendingUp", None),
            ("Compliance", "/staff/compliance", "Security", None),
            ("Profile", "/profile", "Person", None),
        ],
    ),
    (
        "admin",
        Role::ADMINISTRATIVE,
        &[
            ("Dashboard", "/admin/dashboard", "Dashboard", None),
            (
                "User Management",
                "/admin/user-role-management",
                "People",
                Some(&[Role::SystemAdmin]),
            ),
            (
                "Upload Resource",
                "/admin/upload-resource",
                "Upload",
                Some(&[Role::ContentAdmin, Role::SystemAdmin]),
            ),
            (
                "Resource Version",
                "/admin/resource-version",
                "History",
                Some(&[Role::ContentAdmin, Role::SystemAdmin]),
            ),
            (
                "Webinar Management",
                "/admin/webinar-management",
                "VideoCall",
                Some(&[Role::TrainingAdmin, Role::SystemAdmin]),
            ),
            (
                "Notification Center",
                "/admin/notification-center",
                "Notifications",
                Some(&[Role::CommOfficer, Role::SystemAdmin]),
            ),
            (
                "Analytics",
                "/admin/analytics",
                "Analytics",
                Some(&[Role::Manager, Role::SystemAdmin, Role::Auditor]),
            ),
            ("Profile", "/profile", "Person", None),
        ],
    ),
];

/// Dashboard metrics of every role: (label, key)
pub const DASHBOARDS: &[(Role, &[(&str, &str)])] = &[
    (
        Role::Taxpayer,
        &[
            ("Enrolled Courses", "enrolledCourses"),
            ("Completed Courses", "completedCourses"),
            ("Certificates", "certificates"),
            ("Progress", "averageProgress"),
        ],
    ),
    (
        Role::MorStaff,
        &[
            ("Total Courses", "totalCourses"),
            ("Completed Courses", "completedCourses"),
            ("Certificates", "certificates"),
            ("Compliance Score", "complianceScore"),
        ],
    ),
    (
        Role::ContentAdmin,
        &[
            ("Total Resources", "totalResources"),
            ("Uploaded This Month", "resourcesThisMonth"),
            ("Total Downloads", "totalDownloads"),
            ("Resource Views", "resourceViews"),
        ],
    ),
    (
        Role::TrainingAdmin,
        &[
            ("Scheduled Webinars", "scheduledWebinars"),
            ("Total Registrations", "webinarRegistrations"),
            ("Attendance Rate", "attendanceRate"),
            ("Upcoming Webinars", "upcomingWebinars"),
        ],
    ),
    (
        Role::CommOfficer,
        &[
            ("Sent Notifications", "sentNotifications"),
            ("Open Rate", "notificationOpenRate"),
            ("This Month", "notificationsThisMonth"),
            ("Campaigns", "activeCampaigns"),
        ],
    ),
    (
        Role::Manager,
        &[
            ("Total Users", "totalUsers"),
            ("Active Users", "activeUsers"),
            ("Course Completions", "courseCompletions"),
            ("System Uptime", "systemUptime"),
        ],
    ),
    (
        Role::SystemAdmin,
        &[
            ("Total Users", "totalUsers"),
            ("System Health", "systemHealth"),
            ("Active Sessions", "activeSessions"),
            ("Storage Usage", "storageUsage"),
        ],
    ),
    (
        Role::Auditor,
        &[
            ("Audit Logs", "auditLogs"),
            ("Compliance Score", "complianceScore"),
            ("Security Events", "securityEvents"),
            ("User Activities", "userActivities"),
        ],
    ),
];

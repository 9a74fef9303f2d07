/// Display format for normalized timestamps: "2025-01-15 09:30:00"
pub(crate) const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Extension (without the dot) that marks a file as a task record
pub(crate) const RECORD_EXTENSION: &str = "task";

/// Directory under the worklog home holding task records
pub(crate) const RECORDS_DIR: &str = "tasks";

/// Project mapping file under the worklog home
pub(crate) const MAPPING_FILE: &str = "projects.json";

/// Worklog home directory name under the user's home
pub(crate) const HOME_DIR: &str = ".worklog";

/// Environment variable overriding the worklog home
pub(crate) const HOME_ENV: &str = "WORKLOG_HOME";

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VizError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Chart rendering error: {message}")]
    RenderError { message: String },

    #[error("No rows for '{country}' after filtering")]
    EmptySelectionError { country: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, VizError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Data,
    Rendering,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl VizError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            VizError::CsvError(_) | VizError::EmptySelectionError { .. } => ErrorCategory::Data,
            VizError::IoError(_) => ErrorCategory::System,
            VizError::RenderError { .. } => ErrorCategory::Rendering,
            VizError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            VizError::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
            VizError::CsvError(_) | VizError::EmptySelectionError { .. } => ErrorSeverity::High,
            VizError::RenderError { .. } => ErrorSeverity::High,
            VizError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            VizError::CsvError(_) => {
                "Check that the input file is a CSV with country_name, year and v2x_polyarchy columns".to_string()
            }
            VizError::IoError(_) => {
                "Check that the data file exists and the output directory is writable".to_string()
            }
            VizError::RenderError { .. } => {
                "Check that the output path is writable and system fonts are available".to_string()
            }
            VizError::EmptySelectionError { country } => format!(
                "Check that the dataset contains rows for '{}' from 1980 onward",
                country
            ),
            VizError::InvalidConfigValueError { field, .. } => {
                format!("Check the --{} argument", field.replace('_', "-"))
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            VizError::CsvError(e) => format!("Could not read the dataset: {}", e),
            VizError::IoError(e) => format!("File system error: {}", e),
            VizError::RenderError { message } => format!("Could not render the charts: {}", message),
            VizError::EmptySelectionError { country } => {
                format!("The dataset has no usable rows for {}", country)
            }
            VizError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem with {}: {}", field, reason)
            }
        }
    }
}

//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::resource::Resource;

/// Sentinel photo filename meaning "no photo uploaded".
pub const DEFAULT_PHOTO: &str = "anonymous.jpg";

/// Employee entity
///
/// `department` is the department's name, not an id — the backend
/// stores the reference denormalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Employee {
    pub employee_id: i64,
    pub employee_name: String,
    pub department: String,
    /// Wire format `YYYY-MM-DD`; `None` only while drafting.
    pub date_of_joining: Option<NaiveDate>,
    #[serde(default = "default_photo")]
    pub photo_file_name: String,
}

fn default_photo() -> String {
    DEFAULT_PHOTO.to_string()
}

/// Create employee payload (full record minus id)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct EmployeeCreate {
    #[validate(length(min = 1, message = "may not be blank"))]
    pub employee_name: String,
    #[validate(length(min = 1, message = "may not be blank"))]
    pub department: String,
    #[validate(required(message = "is required"))]
    pub date_of_joining: Option<NaiveDate>,
    pub photo_file_name: String,
}

impl Resource for Employee {
    type Create = EmployeeCreate;

    const PATH: &'static str = "employee";
    const LABEL: &'static str = "Employee";

    fn id(&self) -> i64 {
        self.employee_id
    }

    fn field_names() -> &'static [&'static str] {
        &[
            "EmployeeId",
            "EmployeeName",
            "Department",
            "DateOfJoining",
            "PhotoFileName",
        ]
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "EmployeeId" => Some(self.employee_id.to_string()),
            "EmployeeName" => Some(self.employee_name.clone()),
            "Department" => Some(self.department.clone()),
            "DateOfJoining" => Some(
                self.date_of_joining
                    .map(|d| d.to_string())
                    .unwrap_or_default(),
            ),
            "PhotoFileName" => Some(self.photo_file_name.clone()),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: &str) -> bool {
        match name {
            "EmployeeName" => {
                self.employee_name = value.to_string();
                true
            }
            "Department" => {
                self.department = value.to_string();
                true
            }
            "DateOfJoining" => {
                if value.is_empty() {
                    self.date_of_joining = None;
                    return true;
                }
                match value.parse::<NaiveDate>() {
                    Ok(date) => {
                        self.date_of_joining = Some(date);
                        true
                    }
                    Err(_) => false,
                }
            }
            "PhotoFileName" => {
                self.photo_file_name = value.to_string();
                true
            }
            _ => false,
        }
    }

    fn draft() -> Self {
        Self {
            employee_id: 0,
            employee_name: String::new(),
            department: String::new(),
            date_of_joining: None,
            photo_file_name: DEFAULT_PHOTO.to_string(),
        }
    }

    fn to_create(&self) -> EmployeeCreate {
        EmployeeCreate {
            employee_name: self.employee_name.trim().to_string(),
            department: self.department.trim().to_string(),
            date_of_joining: self.date_of_joining,
            photo_file_name: self.photo_file_name.clone(),
        }
    }
}

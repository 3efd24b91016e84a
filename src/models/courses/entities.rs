use serde::{Deserialize, Serialize};

// Course summary as embedded in user and assignment responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub code: String,
    pub name: String,
}

// Membership role inside a course
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CourseRole {
    Student,
    Instructor,
}

impl CourseRole {
    pub const STUDENT: &'static str = "student";
    pub const INSTRUCTOR: &'static str = "instructor";
}

impl<'de> serde::Deserialize<'de> for CourseRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            CourseRole::STUDENT => Ok(CourseRole::Student),
            CourseRole::INSTRUCTOR => Ok(CourseRole::Instructor),
            _ => Err(serde::de::Error::custom(format!(
                "Invalid user type: '{s}'. Supported types: student, instructor"
            ))),
        }
    }
}

impl std::fmt::Display for CourseRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseRole::Student => write!(f, "{}", CourseRole::STUDENT),
            CourseRole::Instructor => write!(f, "{}", CourseRole::INSTRUCTOR),
        }
    }
}

impl std::str::FromStr for CourseRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(CourseRole::Student),
            "instructor" => Ok(CourseRole::Instructor),
            _ => Err(format!("Invalid course role: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_role_display() {
        assert_eq!(CourseRole::Student.to_string(), "student");
        assert_eq!(CourseRole::Instructor.to_string(), "instructor");
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!(CourseRole::from_str("student"), Ok(CourseRole::Student));
        assert_eq!(
            CourseRole::from_str("instructor"),
            Ok(CourseRole::Instructor)
        );
        assert!(CourseRole::from_str("ta").is_err());
    }

    #[test]
    fn test_role_deserialize_rejects_unknown() {
        assert!(serde_json::from_str::<CourseRole>("\"student\"").is_ok());
        assert!(serde_json::from_str::<CourseRole>("\"grader\"").is_err());
    }
}

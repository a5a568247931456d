use models::job::{ImageFields, NewJob};

use crate::errors::ServiceError;

/// Text fields of a posting as received, before presence checks.
/// Values are kept verbatim: no trimming, no coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub publisher_position: Option<String>,
    pub business_name: Option<String>,
    pub business_sector: Option<String>,
    pub job_type: Option<String>,
    pub salary: Option<String>,
    pub benefits: Option<String>,
    pub publisher_name: Option<String>,
    pub contact_info: Option<String>,
}

impl JobForm {
    /// Record a named form value. Accepts camelCase names and their
    /// snake_case aliases; returns `false` for names that are not job fields.
    pub fn set(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "title" => &mut self.title,
            "description" => &mut self.description,
            "publisherPosition" | "publisher_position" => &mut self.publisher_position,
            "businessName" | "business_name" => &mut self.business_name,
            "businessSector" | "business_sector" => &mut self.business_sector,
            "jobType" | "job_type" => &mut self.job_type,
            "salary" => &mut self.salary,
            "benefits" => &mut self.benefits,
            "publisherName" | "publisher_name" => &mut self.publisher_name,
            "contactInfo" | "contact_info" => &mut self.contact_info,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    /// Presence check for the required fields.
    pub fn validate(self) -> Result<JobFields, ServiceError> {
        fn required(v: Option<String>, name: &str) -> Result<String, ServiceError> {
            v.ok_or_else(|| ServiceError::Validation(format!("missing required field: {name}")))
        }
        Ok(JobFields {
            title: required(self.title, "title")?,
            description: required(self.description, "description")?,
            publisher_position: required(self.publisher_position, "publisherPosition")?,
            business_name: required(self.business_name, "businessName")?,
            business_sector: required(self.business_sector, "businessSector")?,
            job_type: self.job_type,
            salary: self.salary,
            benefits: self.benefits,
            publisher_name: self.publisher_name,
            contact_info: self.contact_info,
        })
    }
}

/// Text fields of a posting with required values guaranteed present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobFields {
    pub title: String,
    pub description: String,
    pub publisher_position: String,
    pub business_name: String,
    pub business_sector: String,
    pub job_type: Option<String>,
    pub salary: Option<String>,
    pub benefits: Option<String>,
    pub publisher_name: Option<String>,
    pub contact_info: Option<String>,
}

impl JobFields {
    pub fn into_new_job(self, images: ImageFields) -> NewJob {
        NewJob {
            title: self.title,
            description: self.description,
            publisher_position: self.publisher_position,
            business_name: self.business_name,
            business_sector: self.business_sector,
            job_type: self.job_type,
            salary: self.salary,
            benefits: self.benefits,
            publisher_name: self.publisher_name,
            contact_info: self.contact_info,
            thumbnail_image: images.thumbnail_image,
            additional_images: images.additional_images,
        }
    }
}

/// A create request: validated fields plus stored image names in upload order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateJobInput {
    pub fields: JobFields,
    pub images: Vec<String>,
}

/// Image count rule, checked before any file is written.
pub fn ensure_image_count(count: usize, max: usize) -> Result<(), ServiceError> {
    if count == 0 {
        return Err(ServiceError::Validation("At least one image is required".into()));
    }
    if count > max {
        return Err(ServiceError::Validation(format!("Too many images (max {max})")));
    }
    Ok(())
}

/// Parse a path identifier. Anything that is not an `i32` cannot name a row.
pub fn parse_job_id(raw: &str) -> Option<i32> {
    raw.parse::<i32>().ok()
}

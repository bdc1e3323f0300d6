//! The advertisement entity: aggregates the validated value objects and scalar
//! fields into one postable unit and maps to/from the service's flat wire
//! representation.

use crate::enums::{AdvertisementState, AdvertisementType, SubClassification, WorkType};
use crate::error::{Error, Result};
use crate::values::{
    Contact, Location, Recruiter, Salary, StandOut, Template, ThirdParties, Video,
};
use crate::wire;
use chrono::{DateTime, Utc};
use serde_json::{json, Map, Value};
use url::Url;
use validator::ValidateEmail;

/// A job advertisement.
///
/// Constructed client-side for create/update calls, or decoded from a server
/// document for retrieve/list calls. Every required sub-object is validated
/// before the entity exists; a partially-invalid instance is never observable.
#[derive(Debug, Clone, PartialEq)]
pub struct Advertisement {
    /// Server-assigned advertisement id
    id: Option<String>,
    /// Client-assigned correlation id
    creation_id: Option<String>,
    third_parties: ThirdParties,
    advertisement_type: AdvertisementType,
    job_title: String,
    /// Title used by the search engine; falls back to `job_title` server-side
    search_job_title: Option<String>,
    location: Location,
    sub_classification: SubClassification,
    work_type: WorkType,
    salary: Salary,
    job_summary: String,
    advertisement_details: String,
    contact: Option<Contact>,
    video: Option<Video>,
    application_email: Option<String>,
    application_form_url: Option<String>,
    end_application_url: Option<String>,
    screen_id: Option<i64>,
    job_reference: Option<String>,
    agent_job_reference: Option<String>,
    template: Option<Template>,
    stand_out: Option<StandOut>,
    recruiter: Recruiter,
    residents_only: bool,
    graduate: bool,
    expiry_date: Option<DateTime<Utc>>,
    state: Option<AdvertisementState>,
}

fn check_text(value: &str, label: &str, max: usize) -> Result<()> {
    if value.is_empty() {
        return Err(Error::InvalidArgument(format!("{} cannot be empty", label)));
    }
    if value.chars().count() > max {
        return Err(Error::InvalidArgument(format!(
            "{} must be no more than {} characters long",
            label, max
        )));
    }
    Ok(())
}

impl Advertisement {
    /// Create an advertisement from its required fields.
    ///
    /// Optional fields are attached afterwards through the validated setters.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        creation_id: Option<String>,
        third_parties: ThirdParties,
        advertisement_type: AdvertisementType,
        job_title: String,
        location: Location,
        sub_classification: SubClassification,
        work_type: WorkType,
        salary: Salary,
        job_summary: String,
        advertisement_details: String,
        recruiter: Recruiter,
    ) -> Result<Self> {
        check_text(&job_title, "Job title", 80)?;
        check_text(&job_summary, "Job summary", 150)?;
        check_text(&advertisement_details, "Advertisement details", 20000)?;

        Ok(Advertisement {
            id: None,
            creation_id,
            third_parties,
            advertisement_type,
            job_title,
            search_job_title: None,
            location,
            sub_classification,
            work_type,
            salary,
            job_summary,
            advertisement_details,
            contact: None,
            video: None,
            application_email: None,
            application_form_url: None,
            end_application_url: None,
            screen_id: None,
            job_reference: None,
            agent_job_reference: None,
            template: None,
            stand_out: None,
            recruiter,
            residents_only: false,
            graduate: false,
            expiry_date: None,
            state: None,
        })
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    pub fn creation_id(&self) -> Option<&str> {
        self.creation_id.as_deref()
    }

    pub fn set_creation_id(&mut self, creation_id: Option<String>) {
        self.creation_id = creation_id;
    }

    pub fn third_parties(&self) -> &ThirdParties {
        &self.third_parties
    }

    pub fn set_third_parties(&mut self, third_parties: ThirdParties) {
        self.third_parties = third_parties;
    }

    pub fn advertisement_type(&self) -> AdvertisementType {
        self.advertisement_type
    }

    pub fn set_advertisement_type(&mut self, advertisement_type: AdvertisementType) {
        self.advertisement_type = advertisement_type;
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    pub fn set_job_title(&mut self, job_title: String) -> Result<()> {
        check_text(&job_title, "Job title", 80)?;
        self.job_title = job_title;
        Ok(())
    }

    pub fn search_job_title(&self) -> Option<&str> {
        self.search_job_title.as_deref()
    }

    pub fn set_search_job_title(&mut self, search_job_title: String) -> Result<()> {
        check_text(&search_job_title, "Search job title", 80)?;
        self.search_job_title = Some(search_job_title);
        Ok(())
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn set_location(&mut self, location: Location) {
        self.location = location;
    }

    pub fn sub_classification(&self) -> SubClassification {
        self.sub_classification
    }

    pub fn set_sub_classification(&mut self, sub_classification: SubClassification) {
        self.sub_classification = sub_classification;
    }

    pub fn work_type(&self) -> WorkType {
        self.work_type
    }

    pub fn set_work_type(&mut self, work_type: WorkType) {
        self.work_type = work_type;
    }

    pub fn salary(&self) -> &Salary {
        &self.salary
    }

    pub fn set_salary(&mut self, salary: Salary) {
        self.salary = salary;
    }

    pub fn job_summary(&self) -> &str {
        &self.job_summary
    }

    pub fn set_job_summary(&mut self, job_summary: String) -> Result<()> {
        check_text(&job_summary, "Job summary", 150)?;
        self.job_summary = job_summary;
        Ok(())
    }

    pub fn advertisement_details(&self) -> &str {
        &self.advertisement_details
    }

    pub fn set_advertisement_details(&mut self, advertisement_details: String) -> Result<()> {
        check_text(&advertisement_details, "Advertisement details", 20000)?;
        self.advertisement_details = advertisement_details;
        Ok(())
    }

    pub fn contact(&self) -> Option<&Contact> {
        self.contact.as_ref()
    }

    pub fn set_contact(&mut self, contact: Option<Contact>) {
        self.contact = contact;
    }

    pub fn video(&self) -> Option<&Video> {
        self.video.as_ref()
    }

    pub fn set_video(&mut self, video: Option<Video>) {
        self.video = video;
    }

    pub fn application_email(&self) -> Option<&str> {
        self.application_email.as_deref()
    }

    pub fn set_application_email(&mut self, application_email: Option<String>) -> Result<()> {
        if let Some(ref email) = application_email {
            if !email.validate_email() {
                return Err(Error::InvalidArgument(
                    "Application email format is invalid".to_string(),
                ));
            }
        }
        self.application_email = application_email;
        Ok(())
    }

    pub fn application_form_url(&self) -> Option<&str> {
        self.application_form_url.as_deref()
    }

    pub fn set_application_form_url(&mut self, url: Option<String>) -> Result<()> {
        if let Some(ref url) = url {
            if Url::parse(url).is_err() {
                return Err(Error::InvalidArgument(
                    "Application form URL format is invalid".to_string(),
                ));
            }
        }
        self.application_form_url = url;
        Ok(())
    }

    pub fn end_application_url(&self) -> Option<&str> {
        self.end_application_url.as_deref()
    }

    pub fn set_end_application_url(&mut self, url: Option<String>) -> Result<()> {
        if let Some(ref url) = url {
            if Url::parse(url).is_err() {
                return Err(Error::InvalidArgument(
                    "End application URL format is invalid".to_string(),
                ));
            }
        }
        self.end_application_url = url;
        Ok(())
    }

    pub fn screen_id(&self) -> Option<i64> {
        self.screen_id
    }

    pub fn set_screen_id(&mut self, screen_id: Option<i64>) {
        self.screen_id = screen_id;
    }

    pub fn job_reference(&self) -> Option<&str> {
        self.job_reference.as_deref()
    }

    pub fn set_job_reference(&mut self, job_reference: Option<String>) {
        self.job_reference = job_reference;
    }

    pub fn agent_job_reference(&self) -> Option<&str> {
        self.agent_job_reference.as_deref()
    }

    pub fn set_agent_job_reference(&mut self, agent_job_reference: Option<String>) {
        self.agent_job_reference = agent_job_reference;
    }

    pub fn template(&self) -> Option<&Template> {
        self.template.as_ref()
    }

    pub fn set_template(&mut self, template: Option<Template>) {
        self.template = template;
    }

    pub fn stand_out(&self) -> Option<&StandOut> {
        self.stand_out.as_ref()
    }

    pub fn set_stand_out(&mut self, stand_out: Option<StandOut>) {
        self.stand_out = stand_out;
    }

    pub fn recruiter(&self) -> &Recruiter {
        &self.recruiter
    }

    pub fn set_recruiter(&mut self, recruiter: Recruiter) {
        self.recruiter = recruiter;
    }

    pub fn residents_only(&self) -> bool {
        self.residents_only
    }

    pub fn set_residents_only(&mut self, residents_only: bool) {
        self.residents_only = residents_only;
    }

    pub fn graduate(&self) -> bool {
        self.graduate
    }

    pub fn set_graduate(&mut self, graduate: bool) {
        self.graduate = graduate;
    }

    pub fn expiry_date(&self) -> Option<DateTime<Utc>> {
        self.expiry_date
    }

    pub fn set_expiry_date(&mut self, expiry_date: Option<DateTime<Utc>>) {
        self.expiry_date = expiry_date;
    }

    /// Set the expiry date from an RFC 3339 timestamp, e.g. `2016-11-06T21:19:00Z`.
    pub fn set_expiry_date_from_str(&mut self, expiry_date: &str) -> Result<()> {
        let parsed = DateTime::parse_from_rfc3339(expiry_date).map_err(|_| {
            Error::InvalidArgument(format!("Invalid expiry date: {}", expiry_date))
        })?;
        self.expiry_date = Some(parsed.with_timezone(&Utc));
        Ok(())
    }

    pub fn state(&self) -> Option<AdvertisementState> {
        self.state
    }

    pub fn set_state(&mut self, state: Option<AdvertisementState>) {
        self.state = state;
    }

    /// Encode to the flat wire representation sent on create/update.
    ///
    /// The boolean flags travel as membership in the `additionalProperties`
    /// tag list. `video`, `standout`, `contact`, `agentJobReference` and
    /// `creationId` are emitted only when set; the remaining optional scalars
    /// are always emitted, null when unset. Server-side fields (`id`,
    /// `expiryDate`, `state`) are never emitted.
    pub fn to_value(&self) -> Value {
        let mut additional_properties: Vec<&str> = Vec::new();
        if self.residents_only {
            additional_properties.push("ResidentsOnly");
        }
        if self.graduate {
            additional_properties.push("Graduate");
        }

        let mut map = Map::new();
        map.insert("thirdParties".to_string(), self.third_parties.to_value());
        map.insert(
            "advertisementType".to_string(),
            json!(self.advertisement_type.as_str()),
        );
        map.insert("jobTitle".to_string(), json!(self.job_title));
        map.insert("searchJobTitle".to_string(), json!(self.search_job_title));
        map.insert("location".to_string(), self.location.to_value());
        map.insert(
            "subclassificationId".to_string(),
            json!(self.sub_classification.code()),
        );
        map.insert("workType".to_string(), json!(self.work_type.as_str()));
        map.insert("salary".to_string(), self.salary.to_value());
        map.insert("jobSummary".to_string(), json!(self.job_summary));
        map.insert(
            "advertisementDetails".to_string(),
            json!(self.advertisement_details),
        );
        map.insert(
            "applicationEmail".to_string(),
            json!(self.application_email),
        );
        map.insert(
            "applicationFormUrl".to_string(),
            json!(self.application_form_url),
        );
        map.insert(
            "endApplicationUrl".to_string(),
            json!(self.end_application_url),
        );
        map.insert("screenId".to_string(), json!(self.screen_id));
        map.insert("jobReference".to_string(), json!(self.job_reference));
        map.insert(
            "template".to_string(),
            self.template
                .as_ref()
                .map(Template::to_value)
                .unwrap_or(Value::Null),
        );
        map.insert("recruiter".to_string(), self.recruiter.to_value());
        map.insert(
            "additionalProperties".to_string(),
            json!(additional_properties),
        );

        if let Some(ref video) = self.video {
            map.insert("video".to_string(), video.to_value());
        }
        if let Some(ref stand_out) = self.stand_out {
            map.insert("standout".to_string(), stand_out.to_value());
        }
        if let Some(ref contact) = self.contact {
            map.insert("contact".to_string(), contact.to_value());
        }
        if let Some(ref agent_job_reference) = self.agent_job_reference {
            map.insert("agentJobReference".to_string(), json!(agent_job_reference));
        }
        if let Some(ref creation_id) = self.creation_id {
            map.insert("creationId".to_string(), json!(creation_id));
        }

        Value::Object(map)
    }

    /// Decode a flat wire document, as returned by the service, back into an
    /// entity. All field constraints are re-checked on the way in, so a
    /// service-introduced invalid value fails fast here.
    pub fn from_value(value: &Value) -> Result<Self> {
        let sub_classification = value
            .get("subclassificationId")
            .and_then(Value::as_u64)
            .ok_or_else(|| {
                Error::InvalidArgument("Missing or invalid field: subclassificationId".to_string())
            })?;
        let sub_classification = u32::try_from(sub_classification)
            .map_err(|_| {
                Error::InvalidArgument(format!(
                    "Unknown subclassification id: {}",
                    sub_classification
                ))
            })
            .and_then(SubClassification::from_code)?;

        let mut advertisement = Advertisement::new(
            wire::opt_str(value, "creationId"),
            ThirdParties::from_value(wire::req_obj(value, "thirdParties")?)?,
            wire::req_str(value, "advertisementType")?.parse()?,
            wire::req_str(value, "jobTitle")?.to_string(),
            Location::from_value(wire::req_obj(value, "location")?)?,
            sub_classification,
            wire::req_str(value, "workType")?.parse()?,
            Salary::from_value(wire::req_obj(value, "salary")?)?,
            wire::req_str(value, "jobSummary")?.to_string(),
            wire::req_str(value, "advertisementDetails")?.to_string(),
            Recruiter::from_value(wire::req_obj(value, "recruiter")?)?,
        )?;

        if let Some(search_job_title) = wire::opt_str(value, "searchJobTitle") {
            advertisement.set_search_job_title(search_job_title)?;
        }
        advertisement.set_application_email(wire::opt_str(value, "applicationEmail"))?;
        advertisement.set_application_form_url(wire::opt_str(value, "applicationFormUrl"))?;
        advertisement.set_end_application_url(wire::opt_str(value, "endApplicationUrl"))?;
        advertisement.set_screen_id(wire::opt_i64(value, "screenId"));
        advertisement.set_job_reference(wire::opt_str(value, "jobReference"));
        advertisement.set_agent_job_reference(wire::opt_str(value, "agentJobReference"));
        advertisement.set_id(wire::opt_str(value, "id"));

        if let Some(contact) = wire::opt_obj(value, "contact") {
            advertisement.set_contact(Some(Contact::from_value(contact)?));
        }
        if let Some(video) = wire::opt_obj(value, "video") {
            advertisement.set_video(Some(Video::from_value(video)?));
        }
        if let Some(template) = wire::opt_obj(value, "template") {
            advertisement.set_template(Some(Template::from_value(template)?));
        }
        if let Some(stand_out) = wire::opt_obj(value, "standout") {
            advertisement.set_stand_out(Some(StandOut::from_value(stand_out)?));
        }

        if let Some(Value::Array(properties)) = value.get("additionalProperties") {
            for property in properties {
                match property.as_str() {
                    Some("ResidentsOnly") => advertisement.set_residents_only(true),
                    Some("Graduate") => advertisement.set_graduate(true),
                    _ => {}
                }
            }
        }

        if let Some(expiry_date) = wire::opt_str(value, "expiryDate") {
            advertisement.set_expiry_date_from_str(&expiry_date)?;
        }
        if let Some(state) = wire::opt_str(value, "state") {
            advertisement.set_state(Some(state.parse()?));
        }

        Ok(advertisement)
    }
}

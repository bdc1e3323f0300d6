//! Closed sets of wire codes used by the ad posting service.
//!
//! Every constrained string the service exchanges is decoded into one of these
//! enums at parse time, so an unknown code surfaces as an
//! [`InvalidArgument`](crate::Error::InvalidArgument) error instead of leaking
//! through as an open string.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Advertisement tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvertisementType {
    /// Paid tier with logo and bullet highlights
    StandOut,
    Classic,
}

impl AdvertisementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdvertisementType::StandOut => "StandOut",
            AdvertisementType::Classic => "Classic",
        }
    }
}

impl FromStr for AdvertisementType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "StandOut" => Ok(AdvertisementType::StandOut),
            "Classic" => Ok(AdvertisementType::Classic),
            _ => Err(Error::InvalidArgument(format!(
                "Unknown advertisement type: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for AdvertisementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employment basis of the advertised position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkType {
    FullTime,
    PartTime,
    Casual,
    ContractTemp,
}

impl WorkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkType::FullTime => "FullTime",
            WorkType::PartTime => "PartTime",
            WorkType::Casual => "Casual",
            WorkType::ContractTemp => "ContractTemp",
        }
    }
}

impl FromStr for WorkType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FullTime" => Ok(WorkType::FullTime),
            "PartTime" => Ok(WorkType::PartTime),
            "Casual" => Ok(WorkType::Casual),
            "ContractTemp" => Ok(WorkType::ContractTemp),
            _ => Err(Error::InvalidArgument(format!("Unknown work type: {}", s))),
        }
    }
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the salary range is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalaryType {
    AnnualPackage,
    AnnualCommission,
    CommissionOnly,
    HourlyRate,
}

impl SalaryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryType::AnnualPackage => "AnnualPackage",
            SalaryType::AnnualCommission => "AnnualCommission",
            SalaryType::CommissionOnly => "CommissionOnly",
            SalaryType::HourlyRate => "HourlyRate",
        }
    }
}

impl FromStr for SalaryType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AnnualPackage" => Ok(SalaryType::AnnualPackage),
            "AnnualCommission" => Ok(SalaryType::AnnualCommission),
            "CommissionOnly" => Ok(SalaryType::CommissionOnly),
            "HourlyRate" => Ok(SalaryType::HourlyRate),
            _ => Err(Error::InvalidArgument(format!("Unknown salary type: {}", s))),
        }
    }
}

impl fmt::Display for SalaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placement of a video within the advertisement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Above,
    Below,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Above => "Above",
            Position::Below => "Below",
        }
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Above" => Ok(Position::Above),
            "Below" => Ok(Position::Below),
            _ => Err(Error::InvalidArgument(format!(
                "Unknown video position: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server-side lifecycle state of an advertisement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvertisementState {
    Open,
    Expired,
}

impl AdvertisementState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdvertisementState::Open => "Open",
            AdvertisementState::Expired => "Expired",
        }
    }
}

impl FromStr for AdvertisementState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Open" => Ok(AdvertisementState::Open),
            "Expired" => Ok(AdvertisementState::Expired),
            _ => Err(Error::InvalidArgument(format!(
                "Unknown advertisement state: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for AdvertisementState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location codes accepted by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationCode {
    Sydney,
    Melbourne,
    Brisbane,
    GoldCoast,
    Adelaide,
    Perth,
    Canberra,
    Hobart,
    Darwin,
    Auckland,
    Wellington,
    Christchurch,
}

impl LocationCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationCode::Sydney => "Sydney",
            LocationCode::Melbourne => "Melbourne",
            LocationCode::Brisbane => "Brisbane",
            LocationCode::GoldCoast => "GoldCoast",
            LocationCode::Adelaide => "Adelaide",
            LocationCode::Perth => "Perth",
            LocationCode::Canberra => "Canberra",
            LocationCode::Hobart => "Hobart",
            LocationCode::Darwin => "Darwin",
            LocationCode::Auckland => "Auckland",
            LocationCode::Wellington => "Wellington",
            LocationCode::Christchurch => "Christchurch",
        }
    }
}

impl FromStr for LocationCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sydney" => Ok(LocationCode::Sydney),
            "Melbourne" => Ok(LocationCode::Melbourne),
            "Brisbane" => Ok(LocationCode::Brisbane),
            "GoldCoast" => Ok(LocationCode::GoldCoast),
            "Adelaide" => Ok(LocationCode::Adelaide),
            "Perth" => Ok(LocationCode::Perth),
            "Canberra" => Ok(LocationCode::Canberra),
            "Hobart" => Ok(LocationCode::Hobart),
            "Darwin" => Ok(LocationCode::Darwin),
            "Auckland" => Ok(LocationCode::Auckland),
            "Wellington" => Ok(LocationCode::Wellington),
            "Christchurch" => Ok(LocationCode::Christchurch),
            _ => Err(Error::InvalidArgument(format!(
                "Unknown location code: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Area codes narrowing a location; an area is only meaningful within its
/// parent location, which the service validates server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationArea {
    CbdInnerWestEasternSuburbs,
    NorthShoreNorthernBeaches,
    ParramattaWesternSuburbs,
    RydeMacquariePark,
    SouthWestLiverpool,
    BaysideSouthEasternSuburbs,
    EasternSuburbs,
    NorthernSuburbs,
    WesternSuburbs,
}

impl LocationArea {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationArea::CbdInnerWestEasternSuburbs => "CBDInnerWestEasternSuburbs",
            LocationArea::NorthShoreNorthernBeaches => "NorthShoreNorthernBeaches",
            LocationArea::ParramattaWesternSuburbs => "ParramattaWesternSuburbs",
            LocationArea::RydeMacquariePark => "RydeMacquariePark",
            LocationArea::SouthWestLiverpool => "SouthWestLiverpool",
            LocationArea::BaysideSouthEasternSuburbs => "BaysideSouthEasternSuburbs",
            LocationArea::EasternSuburbs => "EasternSuburbs",
            LocationArea::NorthernSuburbs => "NorthernSuburbs",
            LocationArea::WesternSuburbs => "WesternSuburbs",
        }
    }
}

impl FromStr for LocationArea {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CBDInnerWestEasternSuburbs" => Ok(LocationArea::CbdInnerWestEasternSuburbs),
            "NorthShoreNorthernBeaches" => Ok(LocationArea::NorthShoreNorthernBeaches),
            "ParramattaWesternSuburbs" => Ok(LocationArea::ParramattaWesternSuburbs),
            "RydeMacquariePark" => Ok(LocationArea::RydeMacquariePark),
            "SouthWestLiverpool" => Ok(LocationArea::SouthWestLiverpool),
            "BaysideSouthEasternSuburbs" => Ok(LocationArea::BaysideSouthEasternSuburbs),
            "EasternSuburbs" => Ok(LocationArea::EasternSuburbs),
            "NorthernSuburbs" => Ok(LocationArea::NorthernSuburbs),
            "WesternSuburbs" => Ok(LocationArea::WesternSuburbs),
            _ => Err(Error::InvalidArgument(format!("Unknown area code: {}", s))),
        }
    }
}

impl fmt::Display for LocationArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Job subclassification, carried on the wire as a numeric id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubClassification {
    BusinessSystemsAnalysts,
    DatabaseDevelopmentAdministration,
    DevelopersProgrammers,
    EngineeringSoftware,
    HelpDeskItSupport,
    Management,
    NetworksSystemsAdministration,
    ProgrammeProjectManagement,
    Security,
    TestingQualityAssurance,
}

impl SubClassification {
    /// Numeric id used on the wire
    pub fn code(&self) -> u32 {
        match self {
            SubClassification::BusinessSystemsAnalysts => 6282,
            SubClassification::DatabaseDevelopmentAdministration => 6286,
            SubClassification::DevelopersProgrammers => 6287,
            SubClassification::EngineeringSoftware => 6290,
            SubClassification::HelpDeskItSupport => 6292,
            SubClassification::Management => 6294,
            SubClassification::NetworksSystemsAdministration => 6298,
            SubClassification::ProgrammeProjectManagement => 6300,
            SubClassification::Security => 6301,
            SubClassification::TestingQualityAssurance => 6303,
        }
    }

    pub fn from_code(code: u32) -> Result<Self, Error> {
        match code {
            6282 => Ok(SubClassification::BusinessSystemsAnalysts),
            6286 => Ok(SubClassification::DatabaseDevelopmentAdministration),
            6287 => Ok(SubClassification::DevelopersProgrammers),
            6290 => Ok(SubClassification::EngineeringSoftware),
            6292 => Ok(SubClassification::HelpDeskItSupport),
            6294 => Ok(SubClassification::Management),
            6298 => Ok(SubClassification::NetworksSystemsAdministration),
            6300 => Ok(SubClassification::ProgrammeProjectManagement),
            6301 => Ok(SubClassification::Security),
            6303 => Ok(SubClassification::TestingQualityAssurance),
            _ => Err(Error::InvalidArgument(format!(
                "Unknown subclassification id: {}",
                code
            ))),
        }
    }
}

mod continent;
mod country;
mod question;
mod report;
mod stats;

pub use continent::{Continent, ContinentParseError};
pub use country::{Country, CountryDraft, CountryError};
pub use question::Question;
pub use report::{ContinentBreakdown, FinalReport, MessageTier, ReportError};
pub use stats::{ContinentStat, ContinentStats};

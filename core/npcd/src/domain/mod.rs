//! npcd 固有のドメイン型（型と不変条件）

pub mod history;
pub mod profile;
pub mod record;

pub use history::ActionHistory;
pub use profile::NpcProfile;
pub use record::CommandRecord;

mod collection;
mod predicate;
mod source;
mod validator;

pub use collection::ValidatorCollection;
pub use predicate::predicate;
pub use predicate::PredicateStyle;
pub use source::SolanaCli;
pub use source::ValidatorSource;
pub use validator::Validator;

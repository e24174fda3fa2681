/// Logging port used by the use cases.
///
/// Keeps the business crate free of any logging backend; the infrastructure
/// layer decides where the messages go.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}

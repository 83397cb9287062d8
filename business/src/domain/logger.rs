/// Logging port for the application layer.
///
/// Use cases only see this trait; the concrete sink lives in
/// `infrastructure/logger`.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}

use crate::wire::HealthRes;

/// Simple health service shared by every Shelf front end
///
/// This service provides a standardised way to check the health status of the Shelf service.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Check health without creating an instance
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Shelf is alive".into(),
        }
    }
}

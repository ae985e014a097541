mod assessment;
mod landing;
mod results;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use assessment::AssessmentView;
pub use landing::LandingView;
pub use results::ResultsView;
pub use state::ViewError;

use super::SpatialError;

pub type Result<T> = std::result::Result<T, SpatialError>;

pub fn handle_error_and_exit(err: SpatialError) -> ! {
    log::error!("{}", err);
    std::process::exit(1);
}

use crate::{entities::Coordinate, ranking::InvalidInput};

fn non_empty(param: Option<&str>) -> Option<&str> {
    param.map(str::trim).filter(|s| !s.is_empty())
}

/// Parse the target coordinate of a ranking request
/// from request parameters.
///
/// Values that can be parsed but are not finite, e.g. "NaN",
/// are passed through and rejected by the ranking.
pub fn parse_target(lat: Option<&str>, lng: Option<&str>) -> Result<Coordinate, InvalidInput> {
    let lat = non_empty(lat).ok_or(InvalidInput::MissingLatitude)?;
    let lng = non_empty(lng).ok_or(InvalidInput::MissingLongitude)?;
    let lat = lat.parse::<f64>().map_err(|err| {
        log::debug!("Invalid latitude '{lat}': {err}");
        InvalidInput::Latitude
    })?;
    let lng = lng.parse::<f64>().map_err(|err| {
        log::debug!("Invalid longitude '{lng}': {err}");
        InvalidInput::Longitude
    })?;
    Ok(Coordinate::new(lat, lng))
}

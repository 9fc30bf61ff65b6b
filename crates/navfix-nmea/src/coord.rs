/// Convert an NMEA degree-minute value (`DDMM.MMMM` for latitude,
/// `DDDMM.MMMM` for longitude, packed into one float) plus a hemisphere
/// letter into signed decimal degrees.
///
/// Whole degrees are the value integer-divided by 100; the remainder is
/// minutes including the fractional part. `S` and `W` negate; any other
/// hemisphere letter reads as north/east.
pub fn to_decimal(coordinate: f64, hemisphere: char) -> f64 {
    let degrees = (coordinate / 100.0).trunc();
    let minutes = coordinate - degrees * 100.0;
    let mut decimal = degrees + minutes / 60.0;
    if hemisphere == 'S' || hemisphere == 'W' {
        decimal = -decimal;
    }
    decimal
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-5;

    #[test]
    fn latitude_north() {
        assert!((to_decimal(4916.45, 'N') - 49.27417).abs() < EPS);
    }

    #[test]
    fn longitude_west_is_negative() {
        assert!((to_decimal(12311.12, 'W') + 123.18533).abs() < EPS);
    }

    #[test]
    fn southern_hemisphere_negates() {
        assert!((to_decimal(3751.65, 'S') + 37.86083).abs() < EPS);
    }

    #[test]
    fn unknown_hemisphere_reads_positive() {
        assert!((to_decimal(4916.45, 'x') - 49.27417).abs() < EPS);
    }

    #[test]
    fn zero_is_zero() {
        assert_eq!(to_decimal(0.0, 'N'), 0.0);
    }
}

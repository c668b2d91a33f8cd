use crate::geometry::Point3d;

/// Parses the text a user types at a console prompt.
pub struct InputParser;

impl InputParser {
    /// Parse `x,y[,z]`, or `@dx,dy[,dz]` relative to `base`.
    pub fn parse_point(input: &str, base: Option<Point3d>) -> Option<Point3d> {
        let input = input.trim();
        let (relative, coords) = match input.strip_prefix('@') {
            Some(rest) => (true, rest),
            None => (false, input),
        };

        let parts: Vec<f64> = coords
            .split(',')
            .map(|part| part.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
            .collect::<Option<Vec<_>>>()?;

        let (x, y, z) = match parts.as_slice() {
            [x, y] => (*x, *y, 0.0),
            [x, y, z] => (*x, *y, *z),
            _ => return None,
        };

        if relative {
            Some(base.unwrap_or(Point3d::ORIGIN).offset(x, y, z))
        } else {
            Some(Point3d::new(x, y, z))
        }
    }

    /// Parse an angle typed in degrees; the result is in radians.
    pub fn parse_angle(input: &str) -> Option<f64> {
        Self::parse_real(input.trim().trim_end_matches('d')).map(f64::to_radians)
    }

    /// Parse a distance: a non-negative number, or a point whose distance
    /// from `base` is taken.
    pub fn parse_distance(input: &str, base: Option<Point3d>) -> Option<f64> {
        if let Some(value) = Self::parse_real(input) {
            return (value >= 0.0).then_some(value);
        }
        let base = base?;
        Self::parse_point(input, Some(base)).map(|point| base.distance_to(&point))
    }

    pub fn parse_integer(input: &str) -> Option<i32> {
        input.trim().parse::<i32>().ok()
    }

    fn parse_real(input: &str) -> Option<f64> {
        input.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point_two_and_three_coordinates() {
        assert_eq!(InputParser::parse_point("1,2", None), Some(Point3d::new(1.0, 2.0, 0.0)));
        assert_eq!(
            InputParser::parse_point(" 1.5, -2 , 3 ", None),
            Some(Point3d::new(1.5, -2.0, 3.0))
        );
    }

    #[test]
    fn test_parse_point_relative_to_base() {
        let base = Point3d::new(10.0, 10.0, 0.0);
        assert_eq!(
            InputParser::parse_point("@5,-5", Some(base)),
            Some(Point3d::new(15.0, 5.0, 0.0))
        );
        assert_eq!(InputParser::parse_point("@1,1", None), Some(Point3d::new(1.0, 1.0, 0.0)));
    }

    #[test]
    fn test_parse_point_invalid() {
        assert_eq!(InputParser::parse_point("", None), None);
        assert_eq!(InputParser::parse_point("1", None), None);
        assert_eq!(InputParser::parse_point("1,2,3,4", None), None);
        assert_eq!(InputParser::parse_point("a,b", None), None);
        assert_eq!(InputParser::parse_point("inf,0", None), None);
    }

    #[test]
    fn test_parse_angle_degrees_to_radians() {
        let angle = InputParser::parse_angle("90").unwrap();
        assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        let angle = InputParser::parse_angle("180d").unwrap();
        assert!((angle - std::f64::consts::PI).abs() < 1e-12);
        assert_eq!(InputParser::parse_angle("north"), None);
    }

    #[test]
    fn test_parse_distance_number_or_point() {
        assert_eq!(InputParser::parse_distance("2.5", None), Some(2.5));
        assert_eq!(InputParser::parse_distance("-1", None), None);
        let base = Point3d::ORIGIN;
        assert_eq!(InputParser::parse_distance("3,4", Some(base)), Some(5.0));
        assert_eq!(InputParser::parse_distance("3,4", None), None);
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(InputParser::parse_integer(" 42 "), Some(42));
        assert_eq!(InputParser::parse_integer("4.2"), None);
    }
}

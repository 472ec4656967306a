use crate::geometry::{Dimension, MultiPolygon, Polygon};
use crate::test::polygon::ring;

pub(crate) const MP0: &str = "MULTIPOLYGON (((40 40, 20 45, 45 30, 40 40)), ((20 35, 10 30, 10 10, 30 5, 45 20, 20 35), (30 20, 20 15, 20 25, 30 20)))";

/// [`MP0`] spread over several lines.
pub(crate) const MP0_PRETTY: &str = "
MULTIPOLYGON
(
  (
    (40 40, 20 45, 45 30, 40 40)
  ),
  (
    (20 35, 10 30, 10 10, 30 5, 45 20, 20 35),
    (30 20, 20 15, 20 25, 30 20)
   )
)";

pub(crate) fn mp0() -> MultiPolygon {
    MultiPolygon::new(
        vec![
            Polygon::new(
                vec![ring(&[[40., 40.], [20., 45.], [45., 30.], [40., 40.]])],
                Dimension::XY,
            ),
            Polygon::new(
                vec![
                    ring(&[
                        [20., 35.],
                        [10., 30.],
                        [10., 10.],
                        [30., 5.],
                        [45., 20.],
                        [20., 35.],
                    ]),
                    ring(&[[30., 20.], [20., 15.], [20., 25.], [30., 20.]]),
                ],
                Dimension::XY,
            ),
        ],
        Dimension::XY,
    )
}

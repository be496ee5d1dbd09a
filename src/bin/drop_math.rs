use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use clap::{Parser, Subcommand};
    use drop_math::{
        Degrees, Matrix2, Matrix3, Matrix4, Vector2, Vector3, Vector4,
        geometry::{Line2, Rect},
    };
    use std::fmt::Display;

    #[derive(Debug, Parser)]
    #[command(about = "Runs worked examples of the drop_math library", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        scenario: Scenario,
    }

    #[derive(Clone, Copy, Debug, Subcommand)]
    enum Scenario {
        /// Check that the diagonals of a parallelogram bisect each other
        Parallelogram,
        /// Evaluate a linear combination of 3D vectors
        VectorAlgebra,
        /// Move a point in 3D using direction vectors
        Movement,
        /// Test columns of 2x2 and 3x3 matrices for linear dependence
        Dependence,
        /// Compute determinants of 2x2, 3x3 and 4x4 matrices
        Determinants,
        /// Solve linear systems with Cramer's rule
        Solve,
        /// Invert regular and singular matrices
        Invert,
        /// Compute the angle between two vectors
        Angle,
        /// Intersect a line segment with a rectangle
        LineBox,
        /// Run every scenario
        All,
    }

    impl Scenario {
        const INDIVIDUAL: [Self; 9] = [
            Self::Parallelogram,
            Self::VectorAlgebra,
            Self::Movement,
            Self::Dependence,
            Self::Determinants,
            Self::Solve,
            Self::Invert,
            Self::Angle,
            Self::LineBox,
        ];

        fn run(self) -> Result<()> {
            match self {
                Self::Parallelogram => parallelogram(),
                Self::VectorAlgebra => vector_algebra(),
                Self::Movement => movement(),
                Self::Dependence => dependence(),
                Self::Determinants => determinants(),
                Self::Solve => solve(),
                Self::Invert => invert(),
                Self::Angle => angle(),
                Self::LineBox => line_box(),
                Self::All => Self::INDIVIDUAL
                    .into_iter()
                    .try_for_each(|scenario| scenario.run()),
            }
        }
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();
        log::debug!("Running scenario {:?}", cli.scenario);
        cli.scenario.run()
    }

    fn check(description: &str, result: impl Display, passed: bool) -> Result<()> {
        if passed {
            log::info!("{description}: {result}");
            Ok(())
        } else {
            anyhow::bail!("{description} gave unexpected result {result}")
        }
    }

    fn parallelogram() -> Result<()> {
        let a = Vector2::new(1.0, 1.0);
        let b = Vector2::new(5.0, 1.0);
        let c = Vector2::new(4.0, 0.0);
        let d = Vector2::new(0.0, 0.0);

        let midpoint_db = d + 0.5 * (b - d);
        let midpoint_ac = a + 0.5 * (c - a);

        check(
            "Midpoint of both parallelogram diagonals",
            midpoint_db,
            midpoint_db == midpoint_ac,
        )
    }

    fn vector_algebra() -> Result<()> {
        let u = Vector3::new(-2.0, 1.0, -2.0);
        let v = Vector3::new(-1.0, 3.0, 0.0);
        let w = Vector3::new(4.0, 1.0, 3.0);

        let result = 2.0 * u + 5.0 * v - 6.0 * w - Vector3::same(1.0);

        check(
            "2u + 5v - 6w - (1, 1, 1)",
            result,
            result == Vector3::new(-34.0, 10.0, -23.0),
        )
    }

    fn movement() -> Result<()> {
        let mut position = Vector3::new(3.0, 0.0, 4.0);
        let look_direction = Vector3::forward();
        let left = look_direction.cross(&Vector3::up()).normalized();

        position += 2.0 * look_direction + 3.0 * left;

        check(
            "Position after two steps forward and three left",
            position,
            position == Vector3::new(0.0, 0.0, 6.0),
        )
    }

    fn dependence() -> Result<()> {
        let dependent = Matrix3::from_columns(
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(3.0, 4.0, 5.0),
            Vector3::new(1.0, 2.0, 3.0),
        );
        let independent = Matrix3::from_columns(
            Vector3::new(-2.0, 3.0, 1.0),
            Vector3::new(4.0, 1.0, 0.0),
            Vector3::new(1.0, -1.0, 2.0),
        );
        let parallel = Matrix2::from_columns(Vector2::new(1.0, 2.0), Vector2::new(2.0, 4.0));

        check(
            "Determinant of dependent columns",
            dependent.determinant(),
            !dependent.is_independent(),
        )?;
        check(
            "Determinant of independent columns",
            independent.determinant(),
            independent.is_independent(),
        )?;
        check(
            "Ratio between parallel columns",
            format!("{:?}", parallel.dependence_ratio()),
            parallel.dependence_ratio().is_some(),
        )
    }

    fn determinants() -> Result<()> {
        let m2 = Matrix2::from_columns(Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0));
        let m3 = Matrix3::from_columns(
            Vector3::new(5.0, 7.0, 4.0),
            Vector3::new(6.0, 1.0, 3.0),
            Vector3::new(7.0, 2.0, 2.0),
        );
        let m4 = Matrix4::from_columns(
            Vector4::new(3.0, 9.0, 4.0, 4.0),
            Vector4::new(6.0, 2.0, 8.0, 2.0),
            Vector4::new(4.0, 6.0, 3.0, 1.0),
            Vector4::new(1.0, 9.0, 8.0, 0.0),
        );

        check(
            "2x2 determinant",
            m2.determinant(),
            (m2.determinant() + 2.0).abs() < 1e-4,
        )?;
        check(
            "3x3 determinant",
            m3.determinant(),
            (m3.determinant() - 63.0).abs() < 1e-3,
        )?;
        check(
            "4x4 determinant",
            m4.determinant(),
            (m4.determinant() + 1068.0).abs() < 1e-2,
        )
    }

    fn solve() -> Result<()> {
        let m2 = Matrix2::from_columns(Vector2::new(2.0, 1.0), Vector2::new(3.0, 5.0));
        let results2 = Vector2::new(2.0, 3.0);
        let x2 = m2.solve_for(&results2);

        let m3 = Matrix3::from_columns(
            Vector3::new(5.0, 2.0, 8.0),
            Vector3::new(1.0, 3.0, 4.0),
            Vector3::new(2.0, 4.0, 7.0),
        );
        let results3 = Vector3::new(4.0, 5.0, 7.0);
        let x3 = m3.solve_for(&results3);

        let m4 = Matrix4::from_columns(
            Vector4::new(5.0, 2.0, 8.0, 4.0),
            Vector4::new(1.0, 3.0, 4.0, 6.0),
            Vector4::new(1.0, 3.0, 4.0, 7.0),
            Vector4::new(2.0, 4.0, 7.0, 6.0),
        );
        let results4 = Vector4::new(1.0, 1.0, 2.0, 2.0);
        let x4 = m4.solve_for(&results4);

        check("Solution of 2x2 system", x2, m2 * x2 == results2)?;
        check("Solution of 3x3 system", x3, m3 * x3 == results3)?;
        check("Solution of 4x4 system", x4, m4 * x4 == results4)
    }

    fn invert() -> Result<()> {
        let m3 = Matrix3::from_columns(
            Vector3::new(3.0, 0.0, 2.0),
            Vector3::new(1.0, 0.0, 2.0),
            Vector3::new(0.0, 1.0, 0.0),
        );
        let m4 = Matrix4::from_columns(
            Vector4::new(1.0, 0.0, 0.0, -1.0),
            Vector4::new(0.0, 2.0, -2.0, 0.0),
            Vector4::new(0.0, 0.0, 3.0, 0.0),
            Vector4::new(0.0, 0.0, 0.0, 4.0),
        );
        let singular = Matrix2::new(1.0, 2.0, 2.0, 4.0);

        let inverse3 = m3.inverted();
        let inverse4 = m4.inverted();
        let singular_inverse = singular.inverted();

        check(
            "Inverse of 3x3 matrix",
            format!("\n{inverse3}"),
            inverse3 * m3 == Matrix3::identity(),
        )?;
        check(
            "Inverse of 4x4 matrix",
            format!("\n{inverse4}"),
            inverse4 * m4 == Matrix4::identity(),
        )?;
        check(
            "Inverse of singular matrix",
            format!("\n{singular_inverse}"),
            !singular_inverse.is_finite(),
        )
    }

    fn angle() -> Result<()> {
        let a = Vector3::new(1.0, 2.0, -2.0);
        let b = Vector3::new(-3.0, -3.0, 0.0);
        let angle = a.angle_between(&b);

        check(
            "Angle between (1, 2, -2) and (-3, -3, 0)",
            angle,
            (angle.0 - Degrees(135.0).0).abs() < 1e-3,
        )
    }

    fn line_box() -> Result<()> {
        let line = Line2::new(Vector2::new(2.0, 1.0), Vector2::new(5.0, 5.0));
        let rect = Rect::new(2.0, 3.0, 5.0, 2.0);

        let hit = line.intersect_rect(&rect);

        check(
            "First intersection of line with box",
            format!("{hit:?}"),
            hit == Some(Vector2::new(3.5, 3.0)),
        )
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}

//! Integration tests for the section and variant layer

use rendf_records::section::{mf1, mf33, mf4, mf6, mf8};
use rendf_records::{Cursor, Error, InterpolationSequence, Record, Tab2};
use rstest::rstest;

/// Replace one 11-column slot of one card (both zero-indexed)
fn patch(text: &str, line: usize, slot: usize, replacement: i64) -> String {
    let mut lines: Vec<String> = text.lines().map(String::from).collect();
    let start = slot * 11;
    lines[line].replace_range(start..start + 11, &format!("{replacement:>11}"));
    lines.join("\n") + "\n"
}

fn reprint<R: Record>(record: &R, mat: i32, mf: i32, mt: i32) -> (String, usize) {
    let mut buffer = String::new();
    let lines = record.print(&mut buffer, mat, mf, mt);
    (buffer, lines)
}

// ---------------------------------------------------------------- MF33

const RECTANGULAR: &str = concat!(
    " 0.000000+0 0.000000+0          0          6         13          3922833  5     \n",
    " 1.100000+0 1.200000+0 1.300000+0 2.100000+0 2.200000+0 2.300000+0922833  5     \n",
    " 2.400000+0 1.000000+0 2.000000+0 3.000000+0 4.000000+0 5.000000+0922833  5     \n",
    " 6.000000+0                                                       922833  5     \n",
);

const RECTANGULAR_BAD_NT: &str = concat!(
    " 0.000000+0 0.000000+0          0          6         14          3922833  5     \n",
    " 1.100000+0 1.200000+0 1.300000+0 2.100000+0 2.200000+0 2.300000+0922833  5     \n",
    " 2.400000+0 1.000000+0 2.000000+0 3.000000+0 4.000000+0 5.000000+0922833  5     \n",
    " 6.000000+0 7.000000+0                                            922833  5     \n",
);

#[test]
fn rectangular_matrix_from_text() {
    let mut cursor = Cursor::new(RECTANGULAR);
    let matrix = mf33::RectangularMatrix::from_text(&mut cursor, 9228, 33, 5).unwrap();

    assert_eq!(matrix.lb(), 6);
    assert_eq!(matrix.ner(), 3);
    assert_eq!(matrix.nec(), 4);
    assert_eq!(matrix.nt(), 13);
    assert_eq!(matrix.row_energies(), [1.1, 1.2, 1.3]);
    assert_eq!(matrix.column_energies(), [2.1, 2.2, 2.3, 2.4]);
    assert_eq!(matrix.values(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(matrix.nc(), 4);

    let (text, lines) = reprint(&matrix, 9228, 33, 5);
    assert_eq!(lines, 4);
    assert_eq!(text, RECTANGULAR);
}

#[test]
fn rectangular_matrix_from_explicit_values() {
    let matrix = mf33::RectangularMatrix::new(
        vec![1.1, 1.2, 1.3],
        vec![2.1, 2.2, 2.3, 2.4],
        vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
    )
    .unwrap();
    let (text, _) = reprint(&matrix, 9228, 33, 5);
    assert_eq!(text, RECTANGULAR);
}

#[test]
fn rectangular_matrix_requires_its_own_code() {
    let lb5 = patch(RECTANGULAR, 0, 3, 5);
    assert_eq!(
        mf33::RectangularMatrix::from_text(&mut Cursor::new(&lb5), 9228, 33, 5),
        Err(Error::Discriminant {
            line: 1,
            field: "LB",
            value: 5
        })
    );
}

#[test]
fn rectangular_matrix_inconsistent_counts() {
    let error =
        mf33::RectangularMatrix::from_text(&mut Cursor::new(RECTANGULAR_BAD_NT), 9228, 33, 5)
            .unwrap_err();
    assert_eq!(
        error,
        Error::Count {
            line: 1,
            field: "NT",
            expected: 13,
            found: 14
        }
    );
}

#[test]
fn explicit_covariance_dispatches_on_lb() {
    let mut cursor = Cursor::new(RECTANGULAR);
    let component = mf33::ExplicitCovariance::from_text(&mut cursor, 9228, 33, 5).unwrap();
    assert_eq!(component.lb(), 6);
    assert!(matches!(component, mf33::ExplicitCovariance::Rectangular(_)));

    let lb7 = patch(RECTANGULAR, 0, 3, 7);
    assert_eq!(
        mf33::ExplicitCovariance::from_text(&mut Cursor::new(&lb7), 9228, 33, 5),
        Err(Error::Discriminant {
            line: 1,
            field: "LB",
            value: 7
        })
    );
}

fn covariance_section() -> mf33::Section {
    let derived = vec![
        mf33::DerivedCovariance::Redundant(
            mf33::DerivedRedundant::new(2.5e3, 2e7, vec![1.0, -1.0], vec![1.0, 4.0]).unwrap(),
        ),
        mf33::DerivedCovariance::RatioToStandard(
            mf33::DerivedRatioToStandard::new(
                1,
                2.5e3,
                2e7,
                9228,
                102,
                3.0,
                0.0,
                vec![1e4, 2e7],
                vec![1.0, 1.0],
            )
            .unwrap(),
        ),
    ];
    let explicit = vec![
        mf33::ExplicitCovariance::Pairs(
            mf33::CovariancePairs::new(1, 0, vec![1e-5, 1e4, 2e7], vec![0.04, 0.02, 0.01])
                .unwrap(),
        ),
        mf33::ExplicitCovariance::Square(
            mf33::SquareMatrix::new(
                1,
                vec![1e-5, 1e4, 2e7],
                vec![0.04, 0.01, 0.02],
            )
            .unwrap(),
        ),
        mf33::ExplicitCovariance::Rectangular(
            mf33::RectangularMatrix::new(
                vec![1.1, 1.2, 1.3],
                vec![2.1, 2.2, 2.3, 2.4],
                vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            )
            .unwrap(),
        ),
    ];
    let block = mf33::ReactionBlock::new(0.0, 0.0, 0, 102, derived, explicit);
    mf33::Section::new(102, 92235.0, 233.0248, 0, vec![block])
}

#[test]
fn covariance_section_round_trip() {
    let section = covariance_section();
    assert_eq!(section.nl(), 1);
    assert_eq!(section.blocks()[0].nk(), 2);
    assert_eq!(section.blocks()[0].ni(), 3);

    let (text, lines) = reprint(&section, 9228, 33, 102);
    // printing appends the sentinel card on top of the indexed count
    assert_eq!(lines, section.nc() + 1);

    let mut cursor = Cursor::new(&text);
    let read = mf33::Section::from_text(&mut cursor, 9228, 33, 102).unwrap();
    assert_eq!(read, section);
    assert!(cursor.is_exhausted());

    let (again, _) = reprint(&read, 9228, 33, 102);
    assert_eq!(again, text);
}

#[test]
fn derived_covariance_procedure_is_closed() {
    let section = covariance_section();
    let (text, _) = reprint(&section, 9228, 33, 102);
    // the first derived component's flag card sits below the section head
    // and the block header
    let broken = patch(&text, 2, 3, 4);
    assert_eq!(
        mf33::Section::from_text(&mut Cursor::new(&broken), 9228, 33, 102),
        Err(Error::Discriminant {
            line: 3,
            field: "LTY",
            value: 4
        })
    );
}

// ----------------------------------------------------------------- MF6

const ELASTIC_LEGENDRE: &str = concat!(
    " 0.000000+0 1.000000-5          2          0          4          39228 6  5     \n",
    " 1.000000+0 2.000000+0 3.000000+0 4.000000+0                      9228 6  5     \n",
);

const ELASTIC: &str = concat!(
    " 5.000000-1 0.000000+0          1          0          1          29228 6  5     \n",
    "          2          1                                            9228 6  5     \n",
    " 0.000000+0 1.000000-5          1          0         12          39228 6  5     \n",
    " 1.000000+0 2.000000+0 3.000000+0 4.000000+0 5.000000+0 6.000000+09228 6  5     \n",
    " 7.000000+0 8.000000+0 9.000000+0 1.000000+1 1.100000+1 1.200000+19228 6  5     \n",
    " 0.000000+0 2.000000+7         15          0          6          39228 6  5     \n",
    " 1.000000+0 2.000000+0 3.000000+0 4.000000+0 5.000000+0 6.000000+09228 6  5     \n",
);

#[test]
fn elastic_legendre_sub_record() {
    let mut cursor = Cursor::new(ELASTIC_LEGENDRE);
    let chunk = mf6::elastic::LegendreCoefficients::from_text(&mut cursor, 9228, 6, 5).unwrap();

    assert_eq!(chunk.energy(), 1e-5);
    assert_eq!(chunk.ltp(), 2);
    assert_eq!(chunk.nw(), 4);
    assert_eq!(chunk.nl(), 3);
    assert_eq!(chunk.coefficients(), [1.0, 2.0, 3.0, 4.0]);
    assert_eq!(chunk.nc(), 2);

    let (text, lines) = reprint(&chunk, 9228, 6, 5);
    assert_eq!(lines, 2);
    assert_eq!(text, ELASTIC_LEGENDRE);

    // the same value built in memory prints the same text
    let built = mf6::elastic::LegendreCoefficients::new(1e-5, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let (text, _) = reprint(&built, 9228, 6, 5);
    assert_eq!(text, ELASTIC_LEGENDRE);
}

#[test]
fn elastic_legendre_requires_its_own_code() {
    let ltp12 = patch(ELASTIC_LEGENDRE, 0, 2, 12);
    assert_eq!(
        mf6::elastic::LegendreCoefficients::from_text(&mut Cursor::new(&ltp12), 9228, 6, 5),
        Err(Error::Discriminant {
            line: 1,
            field: "LTP",
            value: 12
        })
    );
}

#[test]
fn elastic_legendre_inconsistent_counts() {
    let bad_nl = patch(ELASTIC_LEGENDRE, 0, 5, 4);
    assert_eq!(
        mf6::elastic::LegendreCoefficients::from_text(&mut Cursor::new(&bad_nl), 9228, 6, 5),
        Err(Error::Count {
            line: 1,
            field: "NW",
            expected: 5,
            found: 4
        })
    );
}

#[test]
fn charged_particle_elastic_from_text() {
    let mut cursor = Cursor::new(ELASTIC);
    let chunk =
        mf6::ChargedParticleElasticScattering::from_text(&mut cursor, 9228, 6, 5).unwrap();

    assert_eq!(chunk.law(), 5);
    assert_eq!(chunk.spi(), 0.5);
    assert_eq!(chunk.lidp(), 1);
    assert_eq!(chunk.ne(), 2);
    assert_eq!(chunk.nr(), 1);
    assert_eq!(chunk.boundaries(), [2]);
    assert_eq!(chunk.interpolants(), [1]);

    let distributions = chunk.distributions();
    assert_eq!(distributions[0].energy(), 1e-5);
    assert_eq!(distributions[0].ltp(), 1);
    assert_eq!(distributions[0].nw(), 12);
    assert_eq!(distributions[0].nl(), 3);
    match &distributions[0] {
        mf6::ElasticSubSection::NuclearAmplitudeExpansion(expansion) => {
            assert_eq!(expansion.scattering_coefficients(), [1.0, 2.0, 3.0, 4.0]);
            assert_eq!(
                expansion.real_interference_coefficients(),
                [5.0, 7.0, 9.0, 11.0]
            );
            assert_eq!(
                expansion.imaginary_interference_coefficients(),
                [6.0, 8.0, 10.0, 12.0]
            );
        }
        other => panic!("expected a nuclear amplitude expansion, found {other:?}"),
    }

    assert_eq!(distributions[1].energy(), 2e7);
    assert_eq!(distributions[1].ltp(), 15);
    assert_eq!(distributions[1].nw(), 6);
    assert_eq!(distributions[1].nl(), 3);
    match &distributions[1] {
        mf6::ElasticSubSection::NuclearPlusInterference(table) => {
            assert_eq!(table.cosines(), [1.0, 3.0, 5.0]);
            assert_eq!(table.probabilities(), [2.0, 4.0, 6.0]);
        }
        other => panic!("expected a nuclear plus interference table, found {other:?}"),
    }

    assert_eq!(chunk.nc(), 7);
    let (text, lines) = reprint(&chunk, 9228, 6, 5);
    assert_eq!(lines, 7);
    assert_eq!(text, ELASTIC);
}

#[test]
fn charged_particle_elastic_from_explicit_values() {
    let distributions = vec![
        mf6::ElasticSubSection::NuclearAmplitudeExpansion(
            mf6::elastic::NuclearAmplitudeExpansion::new(
                1e-5,
                3,
                vec![
                    1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0,
                ],
            )
            .unwrap(),
        ),
        mf6::ElasticSubSection::NuclearPlusInterference(
            mf6::elastic::NuclearPlusInterference::new(
                2e7,
                15,
                vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            )
            .unwrap(),
        ),
    ];
    let chunk =
        mf6::ChargedParticleElasticScattering::new(0.5, 1, vec![2], vec![1], distributions)
            .unwrap();

    assert_eq!(chunk.nc(), 7);
    let (text, _) = reprint(&chunk, 9228, 6, 5);
    assert_eq!(text, ELASTIC);
}

#[test]
fn elastic_sub_record_code_is_closed() {
    let ltp0 = patch(ELASTIC, 2, 2, 0);
    assert_eq!(
        mf6::ChargedParticleElasticScattering::from_text(&mut Cursor::new(&ltp0), 9228, 6, 5),
        Err(Error::Discriminant {
            line: 3,
            field: "LTP",
            value: 0
        })
    );
}

fn continuum_distribution(
    interpolant: i64,
    points: Vec<mf6::continuum::LegendreCoefficients>,
) -> mf6::ContinuumEnergyAngle {
    let distributions = points
        .into_iter()
        .map(mf6::EnergyDistribution::Legendre)
        .collect::<Vec<_>>();
    let count = distributions.len() as i64;
    mf6::ContinuumEnergyAngle::new(1, 2, vec![count], vec![interpolant], distributions).unwrap()
}

/// The three-product section from a fast neutron evaluation
fn energy_angle_section() -> mf6::Section {
    let products = vec![
        mf6::ReactionProduct::new(
            mf6::Multiplicity::new(
                1001.0,
                0.9986234,
                0,
                1,
                vec![4],
                vec![2],
                vec![1e-5, 1.1e7, 1.147e7, 2e7],
                vec![0.0, 8.45368e-11, 6.62295e-8, 2.14979e-1],
            )
            .unwrap(),
            continuum_distribution(
                1,
                vec![
                    mf6::continuum::LegendreCoefficients::new(
                        1e-5,
                        0,
                        1,
                        4,
                        vec![
                            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0,
                        ],
                    )
                    .unwrap(),
                    mf6::continuum::LegendreCoefficients::new(
                        2e7,
                        0,
                        1,
                        2,
                        vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
                    )
                    .unwrap(),
                ],
            )
            .into(),
        )
        .unwrap(),
        mf6::ReactionProduct::new(
            mf6::Multiplicity::new(
                1.0,
                1.0,
                0,
                1,
                vec![2],
                vec![2],
                vec![1.858639e7, 2e7],
                vec![4.0, 4.0],
            )
            .unwrap(),
            continuum_distribution(
                22,
                vec![
                    mf6::continuum::LegendreCoefficients::new(
                        1.858639e7,
                        0,
                        0,
                        3,
                        vec![0.0, 0.0, 0.5, 2.0, 1.0, 0.0],
                    )
                    .unwrap(),
                    mf6::continuum::LegendreCoefficients::new(
                        2e7,
                        0,
                        0,
                        3,
                        vec![0.0, 0.0, 0.5, 2.0, 1.0, 0.0],
                    )
                    .unwrap(),
                ],
            )
            .into(),
        )
        .unwrap(),
        mf6::ReactionProduct::new(
            mf6::Multiplicity::new(
                0.0,
                0.0,
                0,
                1,
                vec![3],
                vec![2],
                vec![1.858639e7, 1.9e7, 2e7],
                vec![1.0, 2.0, 3.0],
            )
            .unwrap(),
            continuum_distribution(
                5,
                vec![
                    mf6::continuum::LegendreCoefficients::new(
                        1.858639e7,
                        0,
                        0,
                        3,
                        vec![0.0, 1.0, 0.0, 2.0, 0.0, 0.5],
                    )
                    .unwrap(),
                    mf6::continuum::LegendreCoefficients::new(
                        2e7,
                        0,
                        0,
                        3,
                        vec![0.0, 1.0, 0.0, 2.0, 0.0, 0.5],
                    )
                    .unwrap(),
                ],
            )
            .into(),
        )
        .unwrap(),
    ];
    mf6::Section::new(5, 92235.0, 233.0248, 0, 2, products)
}

#[test]
fn energy_angle_section_round_trip() {
    let section = energy_angle_section();
    assert_eq!(section.nk(), 3);
    assert_eq!(section.nc(), 30);

    let (text, lines) = reprint(&section, 9228, 6, 5);
    assert_eq!(lines, section.nc() + 1);

    let mut cursor = Cursor::new(&text);
    let read = mf6::Section::from_text(&mut cursor, 9228, 6, 5).unwrap();
    assert_eq!(read, section);
    assert!(cursor.is_exhausted());

    let product = &read.products()[0];
    assert_eq!(product.zap(), 1001.0);
    assert_eq!(product.law(), 1);
    match product.distribution() {
        mf6::Distribution::ContinuumEnergyAngle(law) => {
            assert_eq!(law.lang(), 1);
            assert_eq!(law.lep(), 2);
            assert_eq!(law.ne(), 2);
            match &law.distributions()[0] {
                mf6::EnergyDistribution::Legendre(point) => {
                    assert_eq!(point.nep(), 4);
                    assert_eq!(point.energies(), [1.0, 4.0, 7.0, 10.0]);
                    assert_eq!(point.total_emission_probabilities(), [2.0, 5.0, 8.0, 11.0]);
                    assert_eq!(point.coefficients()[0], [2.0, 3.0]);
                }
                other => panic!("expected Legendre coefficients, found {other:?}"),
            }
        }
        other => panic!("expected a continuum distribution, found {other:?}"),
    }

    let (again, _) = reprint(&read, 9228, 6, 5);
    assert_eq!(again, text);
}

#[test]
fn declared_law_without_data_round_trips() {
    let product = mf6::ReactionProduct::new(
        mf6::Multiplicity::new(
            0.0,
            0.0,
            0,
            0,
            vec![2],
            vec![2],
            vec![1e-5, 2e7],
            vec![1.0, 1.0],
        )
        .unwrap(),
        mf6::Distribution::Unknown,
    )
    .unwrap();
    let section = mf6::Section::new(5, 92235.0, 233.0248, 0, 2, vec![product]);
    // nothing follows the multiplicity table for LAW=0
    assert_eq!(section.nc(), 4);

    let (text, _) = reprint(&section, 9228, 6, 5);
    let read = mf6::Section::from_text(&mut Cursor::new(&text), 9228, 6, 5).unwrap();
    assert_eq!(read, section);
    assert_eq!(read.products()[0].law(), 0);
}

#[test]
fn kalbach_mann_round_trip() {
    let point = mf6::continuum::KalbachMann::new(
        1e-5,
        0,
        1,
        2,
        vec![0.0, 0.5, 0.1, 2.0, 0.5, 0.2],
    )
    .unwrap();
    assert_eq!(point.energies(), [0.0, 2.0]);
    assert_eq!(point.total_emission_probabilities(), [0.5, 0.5]);
    assert_eq!(point.precompound_fractions(), [0.1, 0.2]);
    assert!(point.slopes().is_empty());

    let distribution = mf6::ContinuumEnergyAngle::new(
        2,
        2,
        vec![1],
        vec![2],
        vec![mf6::EnergyDistribution::KalbachMann(point)],
    )
    .unwrap();
    let (text, lines) = reprint(&distribution, 9228, 6, 16);
    assert_eq!(lines, distribution.nc());

    let read = mf6::ContinuumEnergyAngle::from_text(&mut Cursor::new(&text), 9228, 6, 16).unwrap();
    assert_eq!(read, distribution);
    assert_eq!(read.lang(), 2);
}

#[test]
fn tabulated_continuum_round_trip() {
    let point = mf6::continuum::TabulatedDistribution::new(
        2e7,
        0,
        4,
        1,
        vec![1.5, 0.5, -1.0, 0.2, 1.0, 0.8],
    )
    .unwrap();
    assert_eq!(point.energies(), [1.5]);
    assert_eq!(point.cosines(), [[-1.0, 1.0]]);
    assert_eq!(point.probabilities(), [[0.2, 0.8]]);

    let distribution = mf6::ContinuumEnergyAngle::new(
        14,
        2,
        vec![1],
        vec![2],
        vec![mf6::EnergyDistribution::Tabulated(point)],
    )
    .unwrap();
    let (text, _) = reprint(&distribution, 9228, 6, 16);
    let read = mf6::ContinuumEnergyAngle::from_text(&mut Cursor::new(&text), 9228, 6, 16).unwrap();
    assert_eq!(read, distribution);
    assert_eq!(read.lang(), 14);
}

#[test]
fn product_law_is_closed() {
    let multiplicity = mf6::Multiplicity::new(
        1.0,
        1.0,
        0,
        2,
        vec![2],
        vec![2],
        vec![1e-5, 2e7],
        vec![1.0, 1.0],
    )
    .unwrap();
    let (text, _) = reprint(&multiplicity, 9228, 6, 5);
    assert_eq!(
        mf6::ReactionProduct::from_text(&mut Cursor::new(&text), 9228, 6, 5),
        Err(Error::Discriminant {
            line: 1,
            field: "LAW",
            value: 2
        })
    );
}

#[test]
fn product_law_cross_check() {
    let multiplicity = mf6::Multiplicity::new(
        1.0,
        1.0,
        0,
        5,
        vec![2],
        vec![2],
        vec![1e-5, 2e7],
        vec![1.0, 1.0],
    )
    .unwrap();
    // a LAW=5 multiplicity cannot carry a LAW=0 payload
    assert_eq!(
        mf6::ReactionProduct::new(multiplicity, mf6::Distribution::Unknown),
        Err(Error::Count {
            line: 0,
            field: "LAW",
            expected: 5,
            found: 0
        })
    );
}

#[test]
fn continuum_representation_is_closed() {
    let distribution = continuum_distribution(
        1,
        vec![mf6::continuum::LegendreCoefficients::new(
            1e-5,
            0,
            1,
            2,
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        )
        .unwrap()],
    );
    let (text, _) = reprint(&distribution, 9228, 6, 5);
    let lang8 = patch(&text, 0, 2, 8);
    assert_eq!(
        mf6::ContinuumEnergyAngle::from_text(&mut Cursor::new(&lang8), 9228, 6, 5),
        Err(Error::Discriminant {
            line: 1,
            field: "LANG",
            value: 8
        })
    );
}

// ----------------------------------------------------------------- MF1

#[rstest]
#[case(mf1::Multiplicity::Polynomial(mf1::PolynomialMultiplicity::new(
    vec![2.4367, 0.05],
)))]
#[case(mf1::Multiplicity::Tabulated(mf1::TabulatedMultiplicity::new(
    vec![4], vec![2],
    vec![1e-5, 0.0253, 1e5, 2e7],
    vec![2.4367, 2.4367, 2.4567, 5.15],
).unwrap()))]
fn multiplicity_section_round_trip(#[case] multiplicity: mf1::Multiplicity) {
    let section = mf1::Section::new(92235.0, 233.0248, multiplicity);
    let (text, lines) = reprint(&section, 9228, 1, 452);
    assert_eq!(lines, section.nc() + 1);

    let mut cursor = Cursor::new(&text);
    let read = mf1::Section::from_text(&mut cursor, 9228, 1, 452).unwrap();
    assert_eq!(read, section);
    assert!(cursor.is_exhausted());

    let (again, _) = reprint(&read, 9228, 1, 452);
    assert_eq!(again, text);
}

#[test]
fn multiplicity_representation_is_closed() {
    let section = mf1::Section::new(
        92235.0,
        233.0248,
        mf1::Multiplicity::Polynomial(mf1::PolynomialMultiplicity::new(vec![2.4367])),
    );
    let (text, _) = reprint(&section, 9228, 1, 452);
    let lnu3 = patch(&text, 0, 3, 3);
    assert_eq!(
        mf1::Section::from_text(&mut Cursor::new(&lnu3), 9228, 1, 452),
        Err(Error::Discriminant {
            line: 1,
            field: "LNU",
            value: 3
        })
    );
}

// ----------------------------------------------------------------- MF4

fn legendre_region() -> InterpolationSequence<mf4::LegendreCoefficients> {
    InterpolationSequence::new(
        Tab2::new(0.0, 0.0, 0, 0, 2, vec![2], vec![1]).unwrap(),
        vec![
            mf4::LegendreCoefficients::new(1e-5, vec![0.0, 0.0]),
            mf4::LegendreCoefficients::new(2e7, vec![0.5, 0.1]),
        ],
    )
    .unwrap()
}

fn tabulated_region() -> InterpolationSequence<mf4::TabulatedDistribution> {
    InterpolationSequence::new(
        Tab2::new(0.0, 0.0, 0, 0, 2, vec![2], vec![1]).unwrap(),
        vec![
            mf4::TabulatedDistribution::new(
                1e-5,
                vec![3],
                vec![2],
                vec![-1.0, 0.0, 1.0],
                vec![0.5, 0.5, 0.5],
            )
            .unwrap(),
            mf4::TabulatedDistribution::new(
                2e7,
                vec![3],
                vec![2],
                vec![-1.0, 0.0, 1.0],
                vec![0.1, 0.5, 0.9],
            )
            .unwrap(),
        ],
    )
    .unwrap()
}

#[rstest]
#[case(mf4::Distributions::Isotropic, 2)]
#[case(mf4::Distributions::Legendre(legendre_region()), 8)]
#[case(mf4::Distributions::Tabulated(tabulated_region()), 10)]
#[case(mf4::Distributions::Mixed {
    legendre: legendre_region(),
    tabulated: tabulated_region(),
}, 16)]
fn angular_section_round_trip(#[case] distributions: mf4::Distributions, #[case] cards: usize) {
    let ltt = distributions.ltt();
    let section = mf4::Section::new(2, 92235.0, 233.0248, 2, 2, distributions);
    assert_eq!(section.ltt(), ltt);
    assert_eq!(section.li(), i64::from(ltt == 0));
    assert_eq!(section.nc(), cards);

    let (text, lines) = reprint(&section, 9228, 4, 2);
    assert_eq!(lines, section.nc() + 1);

    let mut cursor = Cursor::new(&text);
    let read = mf4::Section::from_text(&mut cursor, 9228, 4, 2).unwrap();
    assert_eq!(read, section);
    assert!(cursor.is_exhausted());

    let (again, _) = reprint(&read, 9228, 4, 2);
    assert_eq!(again, text);
}

#[test]
fn angular_representation_is_closed() {
    let section = mf4::Section::new(2, 92235.0, 233.0248, 2, 0, mf4::Distributions::Isotropic);
    let (text, _) = reprint(&section, 9228, 4, 2);

    let ltt4 = patch(&text, 0, 3, 4);
    // the isotropy flag no longer matches either, so fix it up first
    let ltt4 = patch(&ltt4, 1, 2, 0);
    assert_eq!(
        mf4::Section::from_text(&mut Cursor::new(&ltt4), 9228, 4, 2),
        Err(Error::Discriminant {
            line: 1,
            field: "LTT",
            value: 4
        })
    );
}

#[test]
fn angular_isotropy_flag_is_cross_checked() {
    let section = mf4::Section::new(2, 92235.0, 233.0248, 2, 0, mf4::Distributions::Isotropic);
    let (text, _) = reprint(&section, 9228, 4, 2);
    let broken = patch(&text, 1, 2, 0);
    assert_eq!(
        mf4::Section::from_text(&mut Cursor::new(&broken), 9228, 4, 2),
        Err(Error::Count {
            line: 2,
            field: "LI",
            expected: 1,
            found: 0
        })
    );
}

// ----------------------------------------------------------------- MF8

#[test]
fn fission_yield_section_round_trip() {
    let thermal = mf8::FissionYieldData::new(
        vec![23066, 54135],
        vec![0, 0],
        vec![2.05e-4, 0.0321],
        vec![1.3e-5, 6.8e-4],
        0.0253,
        0,
    )
    .unwrap();
    let fast = mf8::FissionYieldData::new(
        vec![23066, 54135],
        vec![0, 0],
        vec![2.11e-4, 0.0299],
        vec![1.4e-5, 7.1e-4],
        5e5,
        2,
    )
    .unwrap();
    let section = mf8::Section::new(454, 92235.0, 233.0248, vec![thermal, fast]);
    assert_eq!(section.le(), 1);

    let (text, lines) = reprint(&section, 9228, 8, 454);
    assert_eq!(lines, section.nc() + 1);

    let mut cursor = Cursor::new(&text);
    let read = mf8::Section::from_text(&mut cursor, 9228, 8, 454).unwrap();
    assert_eq!(read, section);
    assert!(cursor.is_exhausted());

    let energies = &read.yields()[0];
    assert_eq!(energies.energy(), 0.0253);
    assert_eq!(energies.nfp(), 2);
    assert_eq!(energies.identifiers(), [23066, 54135]);
    assert_eq!(energies.states(), [0, 0]);
    assert_eq!(energies.yields(), [2.05e-4, 0.0321]);
    assert_eq!(energies.uncertainties(), [1.3e-5, 6.8e-4]);

    let (again, _) = reprint(&read, 9228, 8, 454);
    assert_eq!(again, text);
}

#[test]
fn fission_yield_counts_are_enforced() {
    let record = mf8::FissionYieldData::new(
        vec![23066, 54135],
        vec![0, 0],
        vec![2.05e-4, 0.0321],
        vec![1.3e-5, 6.8e-4],
        0.0253,
        0,
    )
    .unwrap();
    let (text, _) = reprint(&record, 9228, 8, 454);
    let broken = patch(&text, 0, 4, 9);
    assert_eq!(
        mf8::FissionYieldData::from_text(&mut Cursor::new(&broken), 9228, 8, 454),
        Err(Error::Count {
            line: 1,
            field: "NN",
            expected: 8,
            found: 9
        })
    );
}

use dataset::{ColumnarDataset, Dataset, DatasetError, Label, LabelSequence, DEFAULT_LABEL_COLUMN};
use std::sync::Arc;

const CREDIT_CARD_SAMPLE: &str = "\
Time,V1,V2,Amount,Class
0,-1.3598,-0.0728,149.62,\"0\"
0,1.1918,0.2661,2.69,\"0\"
1,-1.3583,-1.3401,378.66,\"1\"
1,-0.9663,-0.1852,123.50,\"0\"
2,-1.1582,0.8777,69.99,\"1\"
";

#[test]
fn loads_labels_and_features_from_csv() {
    let ds = ColumnarDataset::from_csv_reader(CREDIT_CARD_SAMPLE.as_bytes(), DEFAULT_LABEL_COLUMN)
        .unwrap();
    assert_eq!(ds.row_count(), 5);
    assert_eq!(ds.column_names(), vec!["Time", "V1", "V2", "Amount"]);
    assert_eq!(ds.label_at(0), Label::NotFraud);
    assert_eq!(ds.label_at(2), Label::Fraud);
    assert_eq!(ds.feature(2, "Amount"), Some(378.66));
    assert_eq!(ds.feature(2, "Missing"), None);
    assert_eq!(ds.feature(9, "Amount"), None);
}

#[test]
fn count_labels_scans_every_row() {
    let ds = ColumnarDataset::from_csv_reader(CREDIT_CARD_SAMPLE.as_bytes(), "Class").unwrap();
    assert_eq!(ds.count_labels(), (2, 3));
}

#[test]
fn label_column_can_sit_anywhere() {
    let csv = "fraudulent,amount\n1,10.0\n0.0,3.5\n";
    let ds = ColumnarDataset::from_csv_reader(csv.as_bytes(), "fraudulent").unwrap();
    assert_eq!(ds.row_count(), 2);
    assert_eq!(ds.label_at(0), Label::Fraud);
    assert_eq!(ds.label_at(1), Label::NotFraud);
    assert_eq!(ds.column_names(), vec!["amount"]);
}

#[test]
fn missing_label_column_is_reported() {
    let csv = "a,b\n1,2\n";
    let err = ColumnarDataset::from_csv_reader(csv.as_bytes(), "Class").unwrap_err();
    assert!(matches!(err, DatasetError::MissingColumn(ref c) if c == "Class"));
}

#[test]
fn non_binary_label_is_rejected() {
    let csv = "x,Class\n1.0,0\n2.0,2\n";
    let err = ColumnarDataset::from_csv_reader(csv.as_bytes(), "Class").unwrap_err();
    match err {
        DatasetError::InvalidLabel { row, value } => {
            assert_eq!(row, 1);
            assert_eq!(value, "2");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_numeric_feature_is_rejected() {
    let csv = "x,Class\nabc,0\n";
    let err = ColumnarDataset::from_csv_reader(csv.as_bytes(), "Class").unwrap_err();
    assert!(matches!(err, DatasetError::InvalidFeature { row: 0, ref column, .. } if column == "x"));
}

#[test]
fn ragged_rows_are_csv_errors() {
    let csv = "x,Class\n1.0,0,7\n";
    let err = ColumnarDataset::from_csv_reader(csv.as_bytes(), "Class").unwrap_err();
    assert!(matches!(err, DatasetError::Csv(_)));
}

#[test]
fn header_only_csv_yields_empty_dataset() {
    let ds = ColumnarDataset::from_csv_reader("x,Class\n".as_bytes(), "Class").unwrap();
    assert_eq!(ds.row_count(), 0);
    assert_eq!(ds.count_labels(), (0, 0));
}

#[test]
fn missing_file_is_io_error() {
    let err = ColumnarDataset::from_csv_path("does/not/exist.csv", "Class").unwrap_err();
    assert!(matches!(err, DatasetError::Io(_)));
}

#[test]
fn label_sequence_from_bits() {
    let seq = LabelSequence::from_bits(&[0, 0, 1, 0, 1]).unwrap();
    assert_eq!(seq.row_count(), 5);
    assert_eq!(seq.label_at(4), Label::Fraud);
    assert_eq!(seq.count_labels(), (2, 3));

    let err = LabelSequence::from_bits(&[0, 3]).unwrap_err();
    assert!(matches!(err, DatasetError::InvalidLabel { row: 1, .. }));
}

#[test]
fn shared_and_borrowed_datasets_delegate() {
    let seq = Arc::new(LabelSequence::new(vec![Label::Fraud, Label::NotFraud]));
    let borrowed = &*seq;
    assert_eq!(seq.row_count(), 2);
    assert_eq!(Dataset::label_at(&borrowed, 0), Label::Fraud);
    assert_eq!(Dataset::count_labels(&Arc::clone(&seq)), (1, 1));
}

#[test]
fn label_cells_accept_float_spellings() {
    assert_eq!(Label::parse_cell(" 1.0 "), Some(Label::Fraud));
    assert_eq!(Label::parse_cell("0.0"), Some(Label::NotFraud));
    assert_eq!(Label::parse_cell("0.5"), None);
    assert_eq!(Label::parse_cell("yes"), None);
    assert_eq!(u8::from(Label::Fraud), 1);
}

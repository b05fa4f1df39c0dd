//! DynamoDB table synthesis tests.

#[cfg(test)]
mod tests {
    use cdkstack_core::{CdkError, Stack};
    use cdkstack_dynamodb::{Attribute, StreamViewType, Table, TableError, TableProps};
    use serde_json::json;

    use crate::{read_json, test_app};

    #[test]
    fn test_should_synthesize_table_with_partition_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        let mut stack = Stack::new(&app, "TestStack").unwrap();

        let mut table = Table::new(&stack, "MyTable", TableProps::default()).unwrap();
        table.add_partition_key(Attribute::string("id")).unwrap();
        stack.add_resource(table).unwrap();
        app.add_stack(stack).unwrap();
        app.synth().unwrap();

        let template = read_json(&dir.path().join("TestStack.template.json")).unwrap();
        assert_eq!(
            template,
            json!({
                "Resources": {
                    "MyTable794EDED1": {
                        "Type": "AWS::DynamoDB::Table",
                        "Properties": {
                            "KeySchema": [{ "AttributeName": "id", "KeyType": "HASH" }],
                            "AttributeDefinitions": [
                                { "AttributeName": "id", "AttributeType": "S" }
                            ],
                            "ProvisionedThroughput": {
                                "ReadCapacityUnits": 5,
                                "WriteCapacityUnits": 5
                            }
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn test_should_synthesize_composite_key_stream_and_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        let mut stack = Stack::new(&app, "TestStack").unwrap();

        let props = TableProps::builder()
            .table_name("sessions")
            .read_capacity(42)
            .write_capacity(1337)
            .stream_specification(StreamViewType::KeysOnly)
            .build();
        let mut table = Table::new(&stack, "Sessions", props).unwrap();
        table
            .add_partition_key(Attribute::string("user"))
            .unwrap()
            .add_sort_key(Attribute::number("startedAt"))
            .unwrap();
        let stream_arn = table.table_stream_arn();
        let name = table.table_name();
        stack.add_resource(table).unwrap();
        stack.add_output("StreamArn", stream_arn, None).unwrap();
        stack
            .add_output("TableName", name, Some("physical name".to_owned()))
            .unwrap();
        app.add_stack(stack).unwrap();
        app.synth().unwrap();

        let template = read_json(&dir.path().join("TestStack.template.json")).unwrap();
        let props = &template["Resources"]["Sessions8896A56D"]["Properties"];
        assert_eq!(props["TableName"], "sessions");
        assert_eq!(
            props["KeySchema"],
            json!([
                { "AttributeName": "user", "KeyType": "HASH" },
                { "AttributeName": "startedAt", "KeyType": "RANGE" }
            ])
        );
        assert_eq!(
            props["AttributeDefinitions"],
            json!([
                { "AttributeName": "user", "AttributeType": "S" },
                { "AttributeName": "startedAt", "AttributeType": "N" }
            ])
        );
        assert_eq!(
            props["ProvisionedThroughput"],
            json!({ "ReadCapacityUnits": 42, "WriteCapacityUnits": 1337 })
        );
        assert_eq!(props["StreamSpecification"]["StreamViewType"], "KEYS_ONLY");
        assert_eq!(
            template["Outputs"],
            json!({
                "StreamArn": { "Value": { "Fn::GetAtt": ["Sessions8896A56D", "StreamArn"] } },
                "TableName": {
                    "Value": { "Ref": "Sessions8896A56D" },
                    "Description": "physical name"
                }
            })
        );
    }

    #[test]
    fn test_should_fail_synthesis_without_partition_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        let mut stack = Stack::new(&app, "TestStack").unwrap();

        let mut table = Table::new(&stack, "Events", TableProps::default()).unwrap();
        table.add_sort_key(Attribute::number("ts")).unwrap();
        stack.add_resource(table).unwrap();
        app.add_stack(stack).unwrap();

        let err = app.synth().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed with the following errors:\n  \
             [TestStack/Events] a partition key must be specified"
        );
        assert!(matches!(err, CdkError::Validation(_)));
        assert!(!dir.path().join("TestStack.template.json").exists());
    }

    #[test]
    fn test_should_stop_configuration_on_duplicate_sort_key() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());
        let stack = Stack::new(&app, "TestStack").unwrap();

        let mut table = Table::new(&stack, "Events", TableProps::default()).unwrap();
        table.add_sort_key(Attribute::number("ts")).unwrap();
        let err = table
            .add_sort_key(Attribute::string("seq"))
            .map(|_| ())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unable to set seq as a RANGE key, because ts is a RANGE key"
        );
        assert!(matches!(err, TableError::DuplicateKeyRole { .. }));
    }
}

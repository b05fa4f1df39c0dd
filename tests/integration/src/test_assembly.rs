//! Cloud assembly tests spanning several stacks and resource types.

#[cfg(test)]
mod tests {
    use cdkstack_autoscaling_model::{AutoScalingGroupProperties, CfnAutoScalingGroup};
    use cdkstack_core::{AccountId, AwsRegion, Environment, Stack};
    use cdkstack_dynamodb::{Attribute, Table, TableProps};

    use crate::{read_json, test_app};

    #[test]
    fn test_should_write_manifest_for_every_stack() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());

        let mut data = Stack::new(&app, "Data").unwrap();
        let mut users = Table::new(
            &data,
            "Users",
            TableProps::builder().table_name("users").build(),
        )
        .unwrap();
        users.add_partition_key(Attribute::string("id")).unwrap();
        data.add_resource(users).unwrap();

        let mut fleet = Stack::new(&app, "Fleet").unwrap().with_environment(Environment::new(
            AccountId::new("123456789012").unwrap(),
            AwsRegion::new("eu-central-1"),
        ));
        let group = CfnAutoScalingGroup::new(
            &fleet,
            "Workers",
            AutoScalingGroupProperties::builder()
                .min_size("1")
                .max_size("5")
                .build(),
        )
        .unwrap();
        fleet.add_resource(group).unwrap();

        app.add_stack(data).unwrap();
        app.add_stack(fleet).unwrap();
        let assembly = app.synth().unwrap();
        assert_eq!(assembly.stacks.len(), 2);

        let manifest = read_json(&dir.path().join("manifest.json")).unwrap();
        assert_eq!(
            manifest["artifacts"]["Data"]["environment"],
            "aws://000000000000/us-east-1"
        );
        assert_eq!(
            manifest["artifacts"]["Fleet"]["environment"],
            "aws://123456789012/eu-central-1"
        );
        assert_eq!(
            manifest["artifacts"]["Data"]["properties"]["templateFile"],
            "Data.template.json"
        );
        assert_eq!(
            manifest["artifacts"]["Data"]["metadata"]["/Data/Users"][0],
            serde_json::json!({ "type": "aws:cdk:hasPhysicalName", "data": "users" })
        );
        assert_eq!(
            manifest["artifacts"]["Data"]["metadata"]["/Data/Users/Resource"][0],
            serde_json::json!({ "type": "aws:cdk:logicalId", "data": "Users0A0EEA89" })
        );

        let fleet_template = read_json(&dir.path().join("Fleet.template.json")).unwrap();
        assert_eq!(
            fleet_template["Resources"]["Workers"]["Type"],
            "AWS::AutoScaling::AutoScalingGroup"
        );
        assert_eq!(
            fleet_template["Resources"]["Workers"]["Properties"]["MaxSize"],
            "5"
        );
    }

    #[test]
    fn test_should_keep_tables_in_separate_stacks_independent() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());

        for name in ["One", "Two"] {
            let mut stack = Stack::new(&app, name).unwrap();
            let mut table = Table::new(&stack, "Users", TableProps::default()).unwrap();
            table.add_partition_key(Attribute::string("id")).unwrap();
            stack.add_resource(table).unwrap();
            app.add_stack(stack).unwrap();
        }

        let assembly = app.synth().unwrap();
        for name in ["One", "Two"] {
            let template = &assembly.stack(name).unwrap().template;
            assert!(template.resource("Users0A0EEA89").is_some());
        }
    }
}

//! Behaviour of `slcli hardware ...` against scripted managers.

use clap::Parser;
use serde_json::json;
use softlayer_cli::api::models::{
    Hardware, HardwareNetworkComponent, HardwareNotification, ItemPrice, NetworkVlan, OrderReceipt, PriceItem,
    ProductOrder, ProductPackage, User,
};
use softlayer_cli::cli::{Cli, execute};
use softlayer_cli::error::{ApiError, CliError, exit_code_for};
use softlayer_cli::testing::{FakeManagers, FakeUi};

async fn run(fakes: &FakeManagers, ui: &mut FakeUi, args: &[&str]) -> anyhow::Result<()> {
    let cli = Cli::try_parse_from(std::iter::once("slcli").chain(args.iter().copied()))?;
    let managers = fakes.managers();
    execute(cli, &managers, ui).await
}

fn host(id: u64, hostname: &str) -> Hardware {
    Hardware {
        id: Some(id),
        hostname: Some(hostname.to_string()),
        domain: Some("example.com".to_string()),
        ..Default::default()
    }
}

fn package() -> ProductPackage {
    serde_json::from_value(json!({
        "id": 200,
        "activePresets": [ { "id": 64, "keyName": "S1270_32GB" } ],
        "regions": [ {
            "keyname": "DALLAS13",
            "location": { "location": { "name": "dal13", "priceGroups": [ { "id": 7 } ] } }
        } ],
        "items": [
            { "keyName": "IP", "itemCategory": { "categoryCode": "pri_ip_addresses" },
              "prices": [ { "id": 1, "recurringFee": "0", "hourlyRecurringFee": "0" } ] },
            { "keyName": "VPN", "itemCategory": { "categoryCode": "vpn_management" },
              "prices": [ { "id": 2, "recurringFee": "0", "hourlyRecurringFee": "0" } ] },
            { "keyName": "REBOOT", "itemCategory": { "categoryCode": "remote_management" },
              "prices": [ { "id": 3, "recurringFee": "0", "hourlyRecurringFee": "0" } ] },
            { "keyName": "OS_UBUNTU", "itemCategory": { "categoryCode": "os" },
              "softwareDescription": { "referenceCode": "UBUNTU_20_64" },
              "prices": [ { "id": 4, "recurringFee": "0" } ] },
            { "keyName": "BANDWIDTH_0", "capacity": "0", "itemCategory": { "categoryCode": "bandwidth" },
              "prices": [ { "id": 5, "recurringFee": "0", "hourlyRecurringFee": "0" } ] },
            { "keyName": "1G_BONDED", "capacity": "1000", "itemCategory": { "categoryCode": "port_speed" },
              "prices": [ { "id": 6 } ] }
        ]
    }))
    .unwrap()
}

fn create_flags() -> Vec<&'static str> {
    vec![
        "hardware", "create", "-s", "S1270_32GB", "-H", "web1", "-D", "example.com", "-o", "UBUNTU_20_64",
        "-d", "dal13", "-p", "1000",
    ]
}

fn priced(description: &str, fee: f64) -> ItemPrice {
    ItemPrice {
        recurring_fee: Some(fee),
        item: Some(PriceItem {
            description: Some(description.to_string()),
        }),
        ..Default::default()
    }
}

/// Test that an invalid id stops every hardware command before the API
#[tokio::test]
async fn test_invalid_id_makes_no_calls() {
    let fakes = FakeManagers::new();
    for command in [
        "detail", "cancel", "power-on", "power-off", "power-cycle", "reboot", "rescue", "guests", "billing",
        "credentials", "notifications",
    ] {
        let mut ui = FakeUi::new();
        let err = run(&fakes, &mut ui, &["hardware", command, "0"]).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input for 'Hardware server ID'. It must be a positive integer.",
            "{}",
            command
        );
        assert_eq!(exit_code_for(&err), 1);
    }
    assert_eq!(fakes.total_calls(), 0);
}

/// Test list sorts by hostname and renders the default columns
#[tokio::test]
async fn test_list_sorted_by_hostname() {
    let fakes = FakeManagers::new();
    fakes.hardware.list_hardware.returns(vec![host(2, "zeta"), host(1, "alpha")]);
    let mut ui = FakeUi::new();

    run(&fakes, &mut ui, &["hardware", "list"]).await.unwrap();
    let out = ui.outputs();
    assert!(out.contains("public_ip"));
    assert!(out.find("alpha").unwrap() < out.find("zeta").unwrap());
    assert_eq!(fakes.hardware.calls.count_of("list_hardware"), 1);
}

/// Test list filters are passed through
#[tokio::test]
async fn test_list_filters() {
    let fakes = FakeManagers::new();
    let mut ui = FakeUi::new();

    run(
        &fakes,
        &mut ui,
        &["hardware", "list", "-d", "dal13", "--tag", "db", "--tag", "prod", "-n", "1000", "--order", "77"],
    )
    .await
    .unwrap();
    let filter = &fakes.hardware.sent_filters()[0];
    assert_eq!(filter.datacenter.as_deref(), Some("dal13"));
    assert_eq!(filter.tags, ["db", "prod"]);
    assert_eq!(filter.nic_speed, Some(1000));
    assert_eq!(filter.order_id, Some(77));
}

/// Test an unsupported sort column is rejected locally
#[tokio::test]
async fn test_list_unsupported_sortby() {
    let fakes = FakeManagers::new();
    let mut ui = FakeUi::new();

    let err = run(&fakes, &mut ui, &["hardware", "list", "--sortby", "tags"]).await.unwrap_err();
    assert_eq!(err.to_string(), "Incorrect Usage: --sortby 'tags' is not supported.");
    let err = run(&fakes, &mut ui, &["hardware", "list", "--column", "id,bogus"]).await.unwrap_err();
    assert_eq!(err.to_string(), "Incorrect Usage: --column bogus is not supported.");
    assert_eq!(fakes.total_calls(), 0);
}

/// Test list JSON output keeps requested columns in order
#[tokio::test]
async fn test_list_columns_json() {
    let fakes = FakeManagers::new();
    fakes.hardware.list_hardware.returns(vec![host(9, "db1")]);
    let mut ui = FakeUi::new();

    run(&fakes, &mut ui, &["hardware", "list", "--column", "hostname,id", "--output", "json"])
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&ui.outputs()).unwrap();
    let record = json[0].as_object().unwrap();
    assert_eq!(record.keys().collect::<Vec<_>>(), ["hostname", "id"]);
    assert_eq!(record["id"], "9");
}

/// Test detail renders the summary rows
#[tokio::test]
async fn test_detail() {
    let fakes = FakeManagers::new();
    let mut hardware = host(1234, "web1");
    hardware.fully_qualified_domain_name = Some("web1.example.com".into());
    hardware.memory_capacity = Some(32);
    fakes.hardware.get_hardware.returns(hardware);
    let mut ui = FakeUi::new();

    run(&fakes, &mut ui, &["hardware", "detail", "1234"]).await.unwrap();
    let out = ui.outputs();
    assert!(out.contains("web1.example.com"));
    assert!(out.contains("32G"));
    assert_eq!(fakes.hardware.calls.all(), ["get_hardware 1234 default"]);
}

/// Test detail surfaces the remote error text
#[tokio::test]
async fn test_detail_api_failure() {
    let fakes = FakeManagers::new();
    fakes.hardware.get_hardware.fails("Internal Server Error");
    let mut ui = FakeUi::new();

    let err = run(&fakes, &mut ui, &["hardware", "detail", "1234"]).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to get hardware server: 1234.\nInternal Server Error");
    assert_eq!(exit_code_for(&err), 2);
}

/// Test that declining a cancellation makes no call
#[tokio::test]
async fn test_cancel_declined() {
    let fakes = FakeManagers::new();
    let mut ui = FakeUi::with_inputs(&["no"]);

    run(&fakes, &mut ui, &["hardware", "cancel", "1234"]).await.unwrap();
    let out = ui.outputs();
    assert!(out.contains("This will cancel the hardware server: 1234 and cannot be undone. Continue?"));
    assert!(out.contains("Aborted."));
    assert_eq!(fakes.total_calls(), 0);
}

/// Test cancel defaults and success message
#[tokio::test]
async fn test_cancel_confirmed() {
    let fakes = FakeManagers::new();
    let mut ui = FakeUi::with_inputs(&["y"]);

    run(&fakes, &mut ui, &["hardware", "cancel", "1234", "-i"]).await.unwrap();
    assert_eq!(fakes.hardware.calls.all(), [r#"cancel_hardware 1234 unneeded "" true"#]);
    assert!(ui.outputs().contains("Hardware server 1234 was cancelled."));
}

/// Test a missing server is reported as such
#[tokio::test]
async fn test_cancel_not_found() {
    let fakes = FakeManagers::new();
    fakes
        .hardware
        .cancel_hardware
        .fails_with(ApiError::with_code("Unable to find object", "SoftLayer_Exception_ObjectNotFound"));
    let mut ui = FakeUi::new();

    let err = run(&fakes, &mut ui, &["hardware", "cancel", "1234", "-f"]).await.unwrap_err();
    assert!(err.to_string().starts_with("Unable to find hardware server with ID: 1234."));
    assert_eq!(exit_code_for(&err), 2);
}

/// Test cancel reasons need no id and no confirmation
#[tokio::test]
async fn test_cancel_reasons() {
    let fakes = FakeManagers::new();
    let mut ui = FakeUi::new();

    run(&fakes, &mut ui, &["hardware", "cancel-reasons"]).await.unwrap();
    let out = ui.outputs();
    assert!(out.contains("Code"));
    assert!(out.contains("unneeded"));
    assert_eq!(fakes.total_calls(), 0);
}

/// Test hard and soft reboot cannot be combined
#[tokio::test]
async fn test_reboot_hard_and_soft() {
    let fakes = FakeManagers::new();
    let mut ui = FakeUi::new();

    let err = run(&fakes, &mut ui, &["hardware", "reboot", "1234", "--hard", "--soft"])
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Incorrect Usage: Can only specify either --hard or --soft.");
    assert_eq!(fakes.total_calls(), 0);
}

/// Test a forced hard reboot
#[tokio::test]
async fn test_reboot_hard() {
    let fakes = FakeManagers::new();
    let mut ui = FakeUi::new();

    run(&fakes, &mut ui, &["hardware", "reboot", "1234", "--hard", "-f"]).await.unwrap();
    assert_eq!(fakes.hardware.calls.all(), ["reboot 1234 Hard"]);
    let out = ui.outputs();
    assert!(out.contains("OK"));
    assert!(out.contains("Hardware server: 1234 was rebooted."));
}

/// Test power on after confirmation and a failing power off
#[tokio::test]
async fn test_power_on_and_off() {
    let fakes = FakeManagers::new();
    let mut ui = FakeUi::with_inputs(&["yes"]);
    run(&fakes, &mut ui, &["hardware", "power-on", "1234"]).await.unwrap();
    assert!(ui.outputs().contains("Hardware server: 1234 was power on."));

    fakes.hardware.power.fails("Server is busy");
    let mut ui = FakeUi::new();
    let err = run(&fakes, &mut ui, &["hardware", "power-off", "1234", "-f"]).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to power off hardware server: 1234.\nServer is busy");
    assert_eq!(fakes.hardware.calls.all(), ["power_on 1234", "power_off 1234"]);
}

/// Test declining power-cycle and rescue stops before any call
#[tokio::test]
async fn test_power_cycle_and_rescue_declined() {
    let fakes = FakeManagers::new();

    let mut ui = FakeUi::with_inputs(&["n"]);
    run(&fakes, &mut ui, &["hardware", "power-cycle", "1234"]).await.unwrap();
    let out = ui.outputs();
    assert!(out.contains("This will power off and then power on hardware server: 1234. Continue?"));
    assert!(out.contains("Aborted."));

    let mut ui = FakeUi::with_inputs(&["no"]);
    run(&fakes, &mut ui, &["hardware", "rescue", "1234"]).await.unwrap();
    let out = ui.outputs();
    assert!(out.contains("This will reboot hardware server: 1234 to the rescue image. Continue?"));
    assert!(out.contains("Aborted."));
    assert_eq!(fakes.total_calls(), 0);
}

/// Test declining a reload stops before any call
#[tokio::test]
async fn test_reload_declined() {
    let fakes = FakeManagers::new();
    let mut ui = FakeUi::with_inputs(&["n"]);

    run(&fakes, &mut ui, &["hardware", "reload", "1234"]).await.unwrap();
    let out = ui.outputs();
    assert!(out.contains("This will reload operating system for hardware server: 1234. Continue?"));
    assert!(out.contains("Aborted."));
    assert_eq!(fakes.total_calls(), 0);
}

/// Test a forced reload passes the script, keys and upgrade flags
#[tokio::test]
async fn test_reload_forced() {
    let fakes = FakeManagers::new();
    let mut ui = FakeUi::new();

    run(
        &fakes,
        &mut ui,
        &["hardware", "reload", "1234", "-i", "https://example.com/setup.sh", "-k", "11", "-k", "12", "-b", "-f"],
    )
    .await
    .unwrap();
    assert_eq!(
        fakes.hardware.calls.all(),
        ["reload 1234 Some(\"https://example.com/setup.sh\") [11, 12] 1 0"]
    );
    let out = ui.outputs();
    assert!(out.contains("OK"));
    assert!(out.contains("Started to reload operating system for hardware server: 1234"));
}

/// Test a failed reload names the server
#[tokio::test]
async fn test_reload_failure() {
    let fakes = FakeManagers::new();
    fakes.hardware.power.fails("Server is busy");
    let mut ui = FakeUi::new();

    let err = run(&fakes, &mut ui, &["hardware", "reload", "1234", "-f"]).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to reload operating system for hardware server: 1234.\nServer is busy"
    );
    assert!(!ui.outputs().contains("OK"));
}

/// Test reload rejects a bad id and a non numeric key locally
#[tokio::test]
async fn test_reload_validation() {
    let fakes = FakeManagers::new();
    let mut ui = FakeUi::new();

    let err = run(&fakes, &mut ui, &["hardware", "reload", "abc", "-f"]).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid input for 'Hardware server ID'. It must be a positive integer."
    );
    assert!(run(&fakes, &mut ui, &["hardware", "reload", "1234", "-k", "mykey", "-f"]).await.is_err());
    assert_eq!(fakes.total_calls(), 0);
}

/// Test declining a firmware update stops before any call
#[tokio::test]
async fn test_update_firmware_declined() {
    let fakes = FakeManagers::new();
    let mut ui = FakeUi::with_inputs(&["n"]);

    run(&fakes, &mut ui, &["hardware", "update-firmware", "1234"]).await.unwrap();
    let out = ui.outputs();
    assert!(out.contains("This will power off hardware server: 1234 and update device firmware. Continue?"));
    assert!(out.contains("Aborted."));
    assert_eq!(fakes.total_calls(), 0);
}

/// Test a forced firmware update and a failing one
#[tokio::test]
async fn test_update_firmware_forced() {
    let fakes = FakeManagers::new();
    let mut ui = FakeUi::new();

    run(&fakes, &mut ui, &["hardware", "update-firmware", "1234", "-f"]).await.unwrap();
    assert_eq!(fakes.hardware.calls.all(), ["update_firmware 1234"]);
    let out = ui.outputs();
    assert!(out.contains("OK"));
    assert!(out.contains("Started to update firmware for hardware server: 1234."));

    fakes.hardware.power.fails("Transaction pending");
    let mut ui = FakeUi::new();
    let err = run(&fakes, &mut ui, &["hardware", "update-firmware", "1234", "-f"])
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to update firmware for hardware server: 1234.\nTransaction pending"
    );
}

/// Test toggle-ipmi flag validation
#[tokio::test]
async fn test_toggle_ipmi_flags() {
    let fakes = FakeManagers::new();
    let mut ui = FakeUi::new();

    let err = run(&fakes, &mut ui, &["hardware", "toggle-ipmi", "1234", "--enable", "--disable"])
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Incorrect Usage: '--enable', '--disable' are exclusive.");

    let err = run(&fakes, &mut ui, &["hardware", "toggle-ipmi", "1234"]).await.unwrap_err();
    assert_eq!(err.to_string(), "Incorrect Usage: Either '--enable' or '--disable' is required.");
    assert_eq!(fakes.total_calls(), 0);

    run(&fakes, &mut ui, &["hardware", "toggle-ipmi", "1234", "--disable"]).await.unwrap();
    assert_eq!(fakes.hardware.calls.all(), ["toggle_ipmi 1234 false"]);
    assert!(
        ui.outputs()
            .contains("Successfully send request to toggle IPMI interface of hardware server '1234'.")
    );
}

/// Test edit validation happens before the API is reached
#[tokio::test]
async fn test_edit_validation() {
    let fakes = FakeManagers::new();
    let mut ui = FakeUi::new();

    let err = run(&fakes, &mut ui, &["hardware", "edit", "1234"]).await.unwrap_err();
    assert_eq!(err.to_string(), "Incorrect Usage: Please pass at least one of the flags.");

    let err = run(&fakes, &mut ui, &["hardware", "edit", "1234", "-u", "data", "-F", "/tmp/file"])
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Incorrect Usage: [-u|--userdata] is not allowed with [-F|--userfile]."
    );

    let err = run(&fakes, &mut ui, &["hardware", "edit", "1234", "-p", "50"]).await.unwrap_err();
    assert!(err.to_string().contains("Public network interface speed"));
    assert_eq!(fakes.total_calls(), 0);
}

/// Test each part of an edit reports its own outcome
#[tokio::test]
async fn test_edit_partial_failure() {
    let fakes = FakeManagers::new();
    fakes.hardware.edit_returns(vec![
        Ok("The hostname and domain of hardware server 1234 were updated.".to_string()),
        Err("Failed to update the tags of hardware server 1234.".to_string()),
    ]);
    let mut ui = FakeUi::new();

    let err = run(&fakes, &mut ui, &["hardware", "edit", "1234", "-H", "db2", "-g", "a", "-g", "b"])
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Failed to update the tags of hardware server 1234.");
    assert_eq!(exit_code_for(&err), 2);
    assert!(ui.outputs().contains("hostname and domain"));

    let changes = &fakes.hardware.sent_changes()[0];
    assert_eq!(changes.hostname.as_deref(), Some("db2"));
    assert_eq!(changes.tags.as_deref(), Some("a,b"));
}

/// Test notifications-add keeps going after one user fails
#[tokio::test]
async fn test_notifications_add_partial_failure() {
    let fakes = FakeManagers::new();
    let notification = |id: u64, username: &str| HardwareNotification {
        id: Some(id),
        user: Some(User {
            username: Some(username.to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };
    fakes.hardware.create_notification.returns(notification(1, "alice"));
    fakes.hardware.create_notification.fails("User not found");
    fakes.hardware.create_notification.returns(notification(3, "carol"));
    let mut ui = FakeUi::new();

    run(&fakes, &mut ui, &["hardware", "notifications-add", "1234", "-u", "10", "-u", "20", "-u", "30"])
        .await
        .unwrap();
    assert_eq!(fakes.hardware.calls.count_of("create_notification"), 3);
    let out = ui.outputs();
    assert!(out.contains("alice"));
    assert!(out.contains("carol"));
    assert_eq!(
        ui.errors(),
        "Failed to create User Customer Notification for user 20.\nUser not found"
    );
}

/// Test notifications-add requires users and fails when none succeed
#[tokio::test]
async fn test_notifications_add_failures() {
    let fakes = FakeManagers::new();
    let mut ui = FakeUi::new();

    let err = run(&fakes, &mut ui, &["hardware", "notifications-add", "1234"]).await.unwrap_err();
    assert_eq!(err.to_string(), "Incorrect Usage: '--users' is required");
    assert_eq!(fakes.total_calls(), 0);

    fakes.hardware.create_notification.fails("boom");
    let err = run(&fakes, &mut ui, &["hardware", "notifications-add", "1234", "-u", "10"])
        .await
        .unwrap_err();
    assert!(matches!(err.downcast_ref::<CliError>(), Some(CliError::Remote(_))));
}

/// Test credentials without any passwords is an error
#[tokio::test]
async fn test_credentials_none_found() {
    let fakes = FakeManagers::new();
    fakes.hardware.get_hardware.returns(host(1234, "web1"));
    let mut ui = FakeUi::new();

    let err = run(&fakes, &mut ui, &["hardware", "credentials", "1234"]).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to find credentials of hardware server 1234.");
    assert_eq!(exit_code_for(&err), 2);
}

/// Test create-credential checks its flags before the API
#[tokio::test]
async fn test_create_credential_missing_flags() {
    let fakes = FakeManagers::new();
    let mut ui = FakeUi::new();

    let err = run(&fakes, &mut ui, &["hardware", "create-credential", "1234", "-U", "root"])
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Incorrect Usage: '-P|--password' is required");
    assert_eq!(fakes.total_calls(), 0);
}

/// Test create-credential sends the matched software id
#[tokio::test]
async fn test_create_credential() {
    let fakes = FakeManagers::new();
    let hardware: Hardware = serde_json::from_value(json!({
        "softwareComponents": [
            { "id": 55, "softwareLicense": { "softwareDescription": { "name": "MySQL" } } }
        ]
    }))
    .unwrap();
    fakes.hardware.get_hardware.returns(hardware);
    let mut ui = FakeUi::new();

    run(
        &fakes,
        &mut ui,
        &["hardware", "create-credential", "1234", "-U", "root", "-P", "s3cret", "-s", "mysql"],
    )
    .await
    .unwrap();
    let sent = &fakes.hardware.sent_credentials()[0];
    assert_eq!(sent.software_id, Some(55));
    assert_eq!(sent.username.as_deref(), Some("root"));
    assert!(ui.outputs().contains("Software Credential Id"));
}

/// Test vlan-add needs a server and at least one VLAN
#[tokio::test]
async fn test_vlan_add_arity() {
    let fakes = FakeManagers::new();
    let mut ui = FakeUi::new();

    let err = run(&fakes, &mut ui, &["hardware", "vlan-add", "1234"]).await.unwrap_err();
    assert_eq!(err.to_string(), "Incorrect Usage: This command requires two or more arguments.");

    let err = run(&fakes, &mut ui, &["hardware", "vlan-add", "1234", "5", "x"]).await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid input for 'VLAN ID'. It must be a positive integer.");
    assert_eq!(fakes.total_calls(), 0);
}

/// Test public and private VLANs are trunked onto the matching components
#[tokio::test]
async fn test_vlan_add_trunks_by_network_space() {
    let fakes = FakeManagers::new();
    let component = |id: u64, ip: Option<&str>| HardwareNetworkComponent {
        id: Some(id),
        primary_ip_address: ip.map(str::to_string),
        ..Default::default()
    };
    fakes.hardware.get_hardware.returns(Hardware {
        frontend_network_components: vec![component(10, None), component(11, Some("169.1.1.1"))],
        backend_network_components: vec![component(20, Some("10.1.1.1"))],
        ..Default::default()
    });
    let vlan = |id: u64, space: &str| NetworkVlan {
        id: Some(id),
        vlan_number: Some(id + 1000),
        network_space: Some(space.to_string()),
        ..Default::default()
    };
    fakes.network.get_vlan.returns(vlan(5, "PUBLIC"));
    fakes.network.get_vlan.returns(vlan(6, "PRIVATE"));
    fakes.hardware.trunk_vlans.returns(vec![vlan(5, "PUBLIC")]);
    fakes.hardware.trunk_vlans.returns(vec![vlan(6, "PRIVATE")]);
    let mut ui = FakeUi::new();

    run(&fakes, &mut ui, &["hardware", "vlan-add", "1234", "5", "6"]).await.unwrap();
    let calls = fakes.hardware.calls.all();
    assert_eq!(&calls[1..], ["trunk_vlans 11 5", "trunk_vlans 20 6"]);
    assert_eq!(fakes.network.calls.all(), ["get_vlan 5", "get_vlan 6"]);
    let out = ui.outputs();
    assert!(out.contains("1005"));
    assert!(out.contains("1006"));
}

/// Test create requires its flags in order
#[tokio::test]
async fn test_create_missing_flag() {
    let fakes = FakeManagers::new();
    let mut ui = FakeUi::new();

    let err = run(&fakes, &mut ui, &["hardware", "create", "-s", "S1270_32GB"]).await.unwrap_err();
    assert_eq!(err.to_string(), "Incorrect Usage: '-H|--hostname' is required");
    assert_eq!(fakes.total_calls(), 0);
}

/// Test --test verifies the order and prints the costs without placing it
#[tokio::test]
async fn test_create_verify_only() {
    let fakes = FakeManagers::new();
    fakes.hardware.get_package.returns(package());
    fakes.hardware.verify_order.returns(ProductOrder {
        prices: vec![priced("Dual Xeon", 100.0), priced("Disk", 25.5)],
        ..Default::default()
    });
    let mut ui = FakeUi::new();
    let mut args = create_flags();
    args.push("--test");

    run(&fakes, &mut ui, &args).await.unwrap();
    assert_eq!(fakes.hardware.calls.all(), ["get_package", "verify_order"]);
    let out = ui.outputs();
    assert!(out.contains("Total monthly cost"));
    assert!(out.contains("125.50"));
    assert!(out.contains("Prices reflected here are retail"));
}

/// Test the cost table stays text when JSON output is requested
#[tokio::test]
async fn test_create_verify_only_json_output_keeps_text_costs() {
    let fakes = FakeManagers::new();
    fakes.hardware.get_package.returns(package());
    fakes.hardware.verify_order.returns(ProductOrder {
        prices: vec![priced("Dual Xeon", 100.0)],
        ..Default::default()
    });
    let mut ui = FakeUi::new();
    let mut args = create_flags();
    args.extend(["--test", "--output", "json"]);

    run(&fakes, &mut ui, &args).await.unwrap();
    let out = ui.outputs();
    assert!(out.contains("Total monthly cost"));
    assert!(out.contains("Prices reflected here are retail"));
    assert!(!out.contains("\"item\":"));
    assert!(!out.trim_start().starts_with('['));
}

/// Test an exported template can be used for a later order
#[tokio::test]
async fn test_create_export_then_order_from_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("server.json");
    let path_arg = path.to_str().unwrap();

    let fakes = FakeManagers::new();
    fakes.hardware.get_package.returns(package());
    let mut ui = FakeUi::new();
    let mut args = create_flags();
    args.extend(["-x", path_arg]);

    run(&fakes, &mut ui, &args).await.unwrap();
    assert!(path.exists());
    assert!(ui.outputs().contains("Hardware server template is exported to:"));
    assert_eq!(fakes.hardware.calls.count_of("place_order"), 0);

    fakes.hardware.get_package.returns(package());
    fakes.hardware.place_order.returns(OrderReceipt {
        order_id: Some(4321),
        order_details: None,
    });
    let mut ui = FakeUi::with_inputs(&["y"]);

    run(&fakes, &mut ui, &["hardware", "create", "-m", path_arg]).await.unwrap();
    let out = ui.outputs();
    assert!(out.contains("Order 4321 was placed."));
    assert!(out.contains("slcli hardware list --order 4321"));
    let order = &fakes.hardware.sent_orders()[0];
    assert_eq!(order.preset_id, Some(64));
    assert_eq!(order.location.as_deref(), Some("DALLAS13"));
}

/// Test a missing template file is a usage error
#[tokio::test]
async fn test_create_missing_template() {
    let fakes = FakeManagers::new();
    let mut ui = FakeUi::new();

    let err = run(&fakes, &mut ui, &["hardware", "create", "-m", "/nonexistent/hw.json"])
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Incorrect Usage: Template file: /nonexistent/hw.json does not exist."
    );
    assert_eq!(fakes.total_calls(), 0);
}

/// Test declining the charge prompt leaves the order unplaced
#[tokio::test]
async fn test_create_declined() {
    let fakes = FakeManagers::new();
    fakes.hardware.get_package.returns(package());
    let mut ui = FakeUi::with_inputs(&["n"]);

    run(&fakes, &mut ui, &create_flags()).await.unwrap();
    assert!(ui.outputs().contains("Aborted."));
    assert_eq!(fakes.hardware.calls.count_of("place_order"), 0);
}

/// Test guests renders CPU with its units
#[tokio::test]
async fn test_guests() {
    let fakes = FakeManagers::new();
    let guest: softlayer_cli::api::models::VirtualGuest = serde_json::from_value(json!({
        "id": 5, "hostname": "vm1", "maxCpu": 4, "maxCpuUnits": "CORE", "maxMemory": 8192,
        "status": { "keyName": "ACTIVE" }, "powerState": { "keyName": "RUNNING" }
    }))
    .unwrap();
    fakes.hardware.get_guests.returns(vec![guest]);
    let mut ui = FakeUi::new();

    run(&fakes, &mut ui, &["hardware", "guests", "1234"]).await.unwrap();
    let out = ui.outputs();
    assert!(out.contains("4 CORE"));
    assert!(out.contains("RUNNING"));
    assert_eq!(fakes.hardware.calls.all(), ["get_guests 1234"]);
}

/// Test billing totals and nested prices
#[tokio::test]
async fn test_billing() {
    let fakes = FakeManagers::new();
    let hardware: Hardware = serde_json::from_value(json!({
        "id": 1234,
        "billingItem": {
            "id": 99, "recurringFee": "100", "nextInvoiceTotalRecurringAmount": 120.5,
            "nextInvoiceChildren": [
                { "description": "32 GB RAM", "categoryCode": "ram", "nextInvoiceTotalRecurringAmount": "20.5" }
            ]
        }
    }))
    .unwrap();
    fakes.hardware.get_hardware.returns(hardware);
    let mut ui = FakeUi::new();

    run(&fakes, &mut ui, &["hardware", "billing", "1234"]).await.unwrap();
    let out = ui.outputs();
    assert!(out.contains("100.00"));
    assert!(out.contains("120.50"));
    assert!(out.contains("32 GB RAM"));
    assert!(out.contains("20.50"));
}

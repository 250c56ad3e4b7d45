use homekit_ac::ac::AcMode;
use homekit_ac::device::AcDevice;
use homekit_ac::error::DeviceError;
use homekit_ac::get_version;

use error_stack::Result;
use log::error;
use rustop::opts;

#[tokio::main]
async fn main() {
    let (args, _) = opts! {
        synopsis "REST airconditioner controller";
        param url:String, desc: "AC control endpoint URL";
        opt mode:Option<String>, desc: "Set target mode (off, cool or hot)";
        opt temperature:Option<f32>, desc: "Set target temperature";
    }.parse_or_exit();

    env_logger::init();
    println!("homekit_ac {}", get_version());

    let mode = match args.mode.as_deref() {
        None => None,
        Some("off") => Some(AcMode::Off),
        Some("cool") => Some(AcMode::Cold),
        Some("hot") => Some(AcMode::Hot),
        Some(other) => {
            eprintln!("Unknown mode '{}', expected off, cool or hot", other);
            std::process::exit(2);
        }
    };

    let device = AcDevice::new(args.url);

    if let Err(e) = run(&device, mode, args.temperature).await {
        error!("{:?}", e);
        std::process::exit(1);
    }
}

async fn run(
    device: &AcDevice,
    mode: Option<AcMode>,
    temperature: Option<f32>,
) -> Result<(), DeviceError> {
    if let Some(mode) = mode {
        device.set_mode(mode).await?.ensure_ok()?;
        println!("Mode set to {}", mode);
    }

    if let Some(temperature) = temperature {
        device.set_temperature(temperature).await?.ensure_ok()?;
        println!("Target temperature set to {}", temperature);
    }

    let state = device.state().await?;
    println!("Mode: {}", state.target_mode);
    println!("Target temperature: {}", state.target_temperature.to_degrees()?);

    Ok(())
}

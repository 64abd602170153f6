use iphone_ua::agent_parser::check_user_agent;
use iphone_ua::args::{get_args, Arguments};
use iphone_ua::export::{pretty_file_size, print_agents, write_agents};
use iphone_ua::progress_bar_manager::ProgressBarManager;
use iphone_ua::reference_data::REFERENCE_DATA;
use iphone_ua::user_agents::{generate_batch, generate_batch_with};
use iphone_ua::UaError;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[tokio::main]
async fn main() -> Result<(), UaError> {
    let Arguments {
        count,
        output,
        seed,
        check,
    } = get_args()?;

    // fail before generating anything if the tables are inconsistent
    REFERENCE_DATA.validate()?;

    let agents = match seed {
        Some(seed) => {
            generate_batch_with(&REFERENCE_DATA, &mut StdRng::seed_from_u64(seed), count)?
        }
        None => generate_batch(count)?,
    };

    if check {
        for ua in &agents {
            check_user_agent(&REFERENCE_DATA, ua)?;
        }
    }

    match output {
        None => print_agents(&mut std::io::stdout().lock(), &agents)?,
        Some(path) => {
            let pbm = ProgressBarManager::init(agents.len() as u64)?;
            pbm.log_above_progress_bars(format!("Generated {} User-Agents", agents.len()));
            let file_size = write_agents(&path, &agents, &pbm).await?;
            pbm.log_above_progress_bars(format!(
                "Completed {} [{}]",
                path.display(),
                pretty_file_size(file_size)
            ));
            pbm.finish();
        }
    }
    Ok(())
}

use apisim::error::AppResult;

fn main() -> AppResult<()> {
    apisim::entry::run()
}

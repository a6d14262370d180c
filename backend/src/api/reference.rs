use common::reference_data::ReferenceTables;

pub async fn get_reference_tables() -> anyhow::Result<ReferenceTables> {
    Ok(ReferenceTables::current())
}

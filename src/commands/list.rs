use crate::{
    libs::{messages::Message, records::Records, view::View},
    msg_info, msg_print,
};
use anyhow::Result;

pub fn cmd(records: &Records) -> Result<()> {
    let students = records.list()?;
    if students.is_empty() {
        msg_info!(Message::NoStudentsFound);
        return Ok(());
    }

    msg_print!(Message::StudentsHeader, true);
    View::students(&students);
    tracing::info!(rows = students.len(), "table data loaded");
    Ok(())
}

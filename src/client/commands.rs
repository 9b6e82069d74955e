//! Operation verbs shared by every client
//!
//! Implementors supply configuration and a dispatch hook; each verb builds
//! its [`Operation`], encodes it and dispatches it with MV input.

use crate::config::Config;
use crate::error::Result;
use crate::options::{
    DeleteOptions, LkPropertiesOptions, LkSchemasOptions, NewOptions, ReadOptions, SelectOptions,
    TableOptions, UpdateOptions,
};
use crate::protocol::marks::has_reserved;
use crate::protocol::{
    encode_operation, ConversionType, DataFormat, DataFormatCru, DataFormatSch, Operation,
    OperationCode,
};

pub trait Commands {
    fn config(&self) -> &Config;

    /// Hand a composed payload to the transport
    fn dispatch(
        &self,
        op_code: OperationCode,
        payload: &str,
        input_format: u8,
        output_format: u8,
    ) -> Result<String>;

    /// Encode and send any operation
    fn send(&self, operation: &Operation, output_format: u8) -> Result<String> {
        let op_code = operation.op_code();
        let custom_vars = &self.config().custom_vars;
        if has_reserved(custom_vars) {
            tracing::warn!("CUSTOMVARS contains reserved marks; the payload will not frame");
        }
        let payload = encode_operation(operation, custom_vars);
        tracing::debug!(
            "Dispatching {:?} ({} bytes, output format {})",
            op_code,
            payload.len(),
            output_format
        );
        self.dispatch(op_code, &payload, DataFormat::Mv.into(), output_format)
    }

    // -------------------------------------------------------------------------
    // CRUD
    // -------------------------------------------------------------------------

    /// Read the records whose ids are in `records` (RS-delimited)
    fn read(
        &self,
        filename: &str,
        records: &str,
        dictionaries: &str,
        options: Option<ReadOptions>,
        output_format: DataFormatCru,
    ) -> Result<String> {
        self.send(
            &Operation::Read {
                filename: filename.to_owned(),
                records: records.to_owned(),
                dictionaries: dictionaries.to_owned(),
                options,
            },
            output_format.into(),
        )
    }

    fn update(
        &self,
        filename: &str,
        records: &str,
        options: Option<UpdateOptions>,
        output_format: DataFormatCru,
    ) -> Result<String> {
        self.send(
            &Operation::Update {
                filename: filename.to_owned(),
                records: records.to_owned(),
                options,
            },
            output_format.into(),
        )
    }

    /// Update only the fields named in `dictionaries`
    fn update_partial(
        &self,
        filename: &str,
        records: &str,
        dictionaries: &str,
        options: Option<UpdateOptions>,
        output_format: DataFormatCru,
    ) -> Result<String> {
        self.send(
            &Operation::UpdatePartial {
                filename: filename.to_owned(),
                records: records.to_owned(),
                dictionaries: dictionaries.to_owned(),
                options,
            },
            output_format.into(),
        )
    }

    fn new_records(
        &self,
        filename: &str,
        records: &str,
        options: Option<NewOptions>,
        output_format: DataFormatCru,
    ) -> Result<String> {
        self.send(
            &Operation::New {
                filename: filename.to_owned(),
                records: records.to_owned(),
                options,
            },
            output_format.into(),
        )
    }

    fn delete(
        &self,
        filename: &str,
        records: &str,
        options: Option<DeleteOptions>,
        output_format: DataFormat,
    ) -> Result<String> {
        self.send(
            &Operation::Delete {
                filename: filename.to_owned(),
                records: records.to_owned(),
                options,
            },
            output_format.into(),
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn select(
        &self,
        filename: &str,
        select_clause: &str,
        sort_clause: &str,
        dict_clause: &str,
        pre_select_clause: &str,
        options: Option<SelectOptions>,
        output_format: DataFormatCru,
    ) -> Result<String> {
        self.send(
            &Operation::Select {
                filename: filename.to_owned(),
                select_clause: select_clause.to_owned(),
                sort_clause: sort_clause.to_owned(),
                dict_clause: dict_clause.to_owned(),
                pre_select_clause: pre_select_clause.to_owned(),
                options,
            },
            output_format.into(),
        )
    }

    // -------------------------------------------------------------------------
    // Routines and conversions
    // -------------------------------------------------------------------------

    fn subroutine(
        &self,
        name: &str,
        args_number: usize,
        arguments: &[String],
        output_format: DataFormat,
    ) -> Result<String> {
        self.send(
            &Operation::Subroutine {
                name: name.to_owned(),
                args_number,
                arguments: arguments.to_vec(),
            },
            output_format.into(),
        )
    }

    fn conversion(
        &self,
        conversion_type: ConversionType,
        expression: &str,
        code: &str,
        output_format: DataFormat,
    ) -> Result<String> {
        self.send(
            &Operation::Conversion {
                conversion_type,
                expression: expression.to_owned(),
                code: code.to_owned(),
            },
            output_format.into(),
        )
    }

    fn format(
        &self,
        expression: &str,
        format_spec: &str,
        output_format: DataFormat,
    ) -> Result<String> {
        self.send(
            &Operation::Format {
                expression: expression.to_owned(),
                format_spec: format_spec.to_owned(),
            },
            output_format.into(),
        )
    }

    fn dictionaries(&self, filename: &str, output_format: DataFormat) -> Result<String> {
        self.send(
            &Operation::Dictionaries {
                filename: filename.to_owned(),
            },
            output_format.into(),
        )
    }

    fn execute(&self, statement: &str, output_format: DataFormat) -> Result<String> {
        self.send(
            &Operation::Execute {
                statement: statement.to_owned(),
            },
            output_format.into(),
        )
    }

    fn version(&self, output_format: DataFormat) -> Result<String> {
        self.send(&Operation::Version, output_format.into())
    }

    fn reset_common_blocks(&self, output_format: DataFormat) -> Result<String> {
        self.send(&Operation::ResetCommonBlocks, output_format.into())
    }

    // -------------------------------------------------------------------------
    // Schemas and tables
    // -------------------------------------------------------------------------

    fn lk_schemas(
        &self,
        options: Option<LkSchemasOptions>,
        output_format: DataFormatSch,
    ) -> Result<String> {
        self.send(&Operation::LkSchemas { options }, output_format.into())
    }

    fn lk_properties(
        &self,
        filename: &str,
        options: Option<LkPropertiesOptions>,
        output_format: DataFormatSch,
    ) -> Result<String> {
        self.send(
            &Operation::LkProperties {
                filename: filename.to_owned(),
                options,
            },
            output_format.into(),
        )
    }

    /// Query `filename` as a tab-separated table
    fn get_table(
        &self,
        filename: &str,
        select_clause: &str,
        dict_clause: &str,
        sort_clause: &str,
        options: Option<TableOptions>,
    ) -> Result<String> {
        self.send(
            &Operation::GetTable {
                filename: filename.to_owned(),
                select_clause: select_clause.to_owned(),
                dict_clause: dict_clause.to_owned(),
                sort_clause: sort_clause.to_owned(),
                options,
            },
            DataFormatSch::Table.into(),
        )
    }

    // -------------------------------------------------------------------------
    // Raw commands
    // -------------------------------------------------------------------------

    /// Send a JSON command document as-is
    fn send_json_command(&self, command: &str) -> Result<String> {
        tracing::debug!("Dispatching JSON command ({} bytes)", command.len());
        let json = DataFormat::Json.into();
        self.dispatch(OperationCode::CommandJson, command, json, json)
    }

    /// Send an XML command document as-is
    fn send_xml_command(&self, command: &str) -> Result<String> {
        tracing::debug!("Dispatching XML command ({} bytes)", command.len());
        let xml = DataFormat::Xml.into();
        self.dispatch(OperationCode::CommandXml, command, xml, xml)
    }
}

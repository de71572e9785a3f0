use dns_dispatch_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for building queries)
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        HickoryRecordType::from(record_type.to_u16())
    }

    /// Convert hickory RecordType → domain RecordType (for parsing answers)
    ///
    /// Returns `None` for every type outside A, AAAA and PTR.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        match hickory_type {
            HickoryRecordType::A => Some(RecordType::A),
            HickoryRecordType::AAAA => Some(RecordType::AAAA),
            HickoryRecordType::PTR => Some(RecordType::PTR),
            _ => None,
        }
    }

    pub fn is_supported(hickory_type: HickoryRecordType) -> bool {
        Self::from_hickory(hickory_type).is_some()
    }
}

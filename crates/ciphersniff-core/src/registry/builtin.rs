//! Built-in constant tables.
//!
//! Values are listed as they appear in reference implementations: one `u32`
//! per table entry, or four packed table bytes per `u32` for byte-wide
//! tables such as S-boxes and character maps. Byte order is resolved at scan
//! time, so each table is stored only once.

/// `(indicator name, constants)`
pub(crate) type BuiltinIndicator = (&'static str, &'static [u32]);

/// `(algorithm name, indicators)`
pub(crate) type BuiltinAlgorithm = (&'static str, &'static [BuiltinIndicator]);

const AES_RCON: &[u32] = &[
    0x01020408, 0x10204080, 0x1B366CD8,
];

const AES_S_BOX: &[u32] = &[
    0x637C777B, 0xF26B6FC5, 0x3001672B, 0xFED7AB76, 0xCA82C97D, 0xFA5947F0, 0xADD4A2AF, 0x9CA472C0,
    0xB7FD9326, 0x363FF7CC, 0x34A5E5F1, 0x71D83115, 0x04C723C3, 0x1896059A, 0x071280E2, 0xEB27B275,
    0x09832C1A, 0x1B6E5AA0, 0x523BD6B3, 0x29E32F84, 0x53D100ED, 0x20FCB15B, 0x6ACBBE39, 0x4A4C58CF,
    0xD0EFAAFB, 0x434D3385, 0x45F9027F, 0x503C9FA8, 0x51A3408F, 0x929D38F5, 0xBCB6DA21, 0x10FFF3D2,
    0xCD0C13EC, 0x5F974417, 0xC4A77E3D, 0x645D1973, 0x60814FDC, 0x222A9088, 0x46EEB814, 0xDE5E0BDB,
    0xE0323A0A, 0x4906245C, 0xC2D3AC62, 0x9195E479, 0xE7C8376D, 0x8DD54EA9, 0x6C56F4EA, 0x657AAE08,
    0xBA78252E, 0x1CA6B4C6, 0xE8DD741F, 0x4BBD8B8A, 0x703EB566, 0x4803F60E, 0x613557B9, 0x86C11D9E,
    0xE1F89811, 0x69D98E94, 0x9B1E87E9, 0xCE5528DF, 0x8CA1890D, 0xBFE64268, 0x41992D0F, 0xB054BB16,
];

const AES_REVERSE_S_BOX: &[u32] = &[
    0x52096AD5, 0x3036A538, 0xBF40A39E, 0x81F3D7FB, 0x7CE33982, 0x9B2FFF87, 0x348E4344, 0xC4DEE9CB,
    0x547B9432, 0xA6C2233D, 0xEE4C950B, 0x42FAC34E, 0x082EA166, 0x28D924B2, 0x765BA249, 0x6D8BD125,
    0x72F8F664, 0x86689816, 0xD4A45CCC, 0x5D65B692, 0x6C704850, 0xFDEDB9DA, 0x5E154657, 0xA78D9D84,
    0x90D8AB00, 0x8CBCD30A, 0xF7E45805, 0xB8B34506, 0xD02C1E8F, 0xCA3F0F02, 0xC1AFBD03, 0x01138A6B,
    0x3A911141, 0x4F67DCEA, 0x97F2CFCE, 0xF0B4E673, 0x96AC7422, 0xE7AD3585, 0xE2F937E8, 0x1C75DF6E,
    0x47F11A71, 0x1D29C589, 0x6FB7620E, 0xAA18BE1B, 0xFC563E4B, 0xC6D27920, 0x9ADBC0FE, 0x78CD5AF4,
    0x1FDDA833, 0x8807C731, 0xB1121059, 0x2780EC5F, 0x60517FA9, 0x19B54A0D, 0x2DE57A9F, 0x93C99CEF,
    0xA0E03B4D, 0xAE2AF5B0, 0xC8EBBB3C, 0x83539961, 0x172B047E, 0xBA77D626, 0xE1691463, 0x55210C7D,
];

const SALSA20_SIGMA: &[u32] = &[
    0x61707865, 0x3320646E, 0x79622D32, 0x6B206574,
];

const BASE64_CHAR_MAP: &[u32] = &[
    0x41424344, 0x45464748, 0x494A4B4C, 0x4D4E4F50, 0x51525354, 0x55565758, 0x595A6162, 0x63646566,
    0x6768696A, 0x6B6C6D6E, 0x6F707172, 0x73747576, 0x7778797A, 0x30313233, 0x34353637, 0x38392B2F,
];

const BASE64_DECODE_MAP_00: &[u32] = &[
    0x0000003E, 0x0000003F, 0x34353637, 0x38393A3B, 0x3C3D0000, 0x00000102, 0x03040506, 0x0708090A,
    0x0B0C0D0E, 0x0F101112, 0x13141516, 0x17181900, 0x001A1B1C, 0x1D1E1F20, 0x21222324, 0x25262728,
    0x292A2B2C, 0x2D2E2F30, 0x31323300,
];

const BASE64_DECODE_MAP_FF: &[u32] = &[
    0xFFFFFF3E, 0xFFFFFF3F, 0x34353637, 0x38393A3B, 0x3C3DFFFF, 0xFF000102, 0x03040506, 0x0708090A,
    0x0B0C0D0E, 0x0F101112, 0x13141516, 0x171819FF, 0xFF1A1B1C, 0x1D1E1F20, 0x21222324, 0x25262728,
    0x292A2B2C, 0x2D2E2F30, 0x313233FF,
];

const CRC32_POLYNOMIAL_1: &[u32] = &[
    0x04C11DB7,
];

const CRC32_POLYNOMIAL_2: &[u32] = &[
    0xDEBB20E3,
];

const CRC32_GENERATOR: &[u32] = &[
    0xEDB88320,
];

const CRC32_POLY_TABLE: &[u32] = &[
    0x00000000, 0x77073096, 0xEE0E612C, 0x990951BA, 0x076DC419, 0x706AF48F, 0xE963A535, 0x9E6495A3,
    0x0EDB8832, 0x79DCB8A4, 0xE0D5E91E, 0x97D2D988, 0x09B64C2B, 0x7EB17CBD, 0xE7B82D07, 0x90BF1D91,
    0x1DB71064, 0x6AB020F2, 0xF3B97148, 0x84BE41DE, 0x1ADAD47D, 0x6DDDE4EB, 0xF4D4B551, 0x83D385C7,
    0x136C9856, 0x646BA8C0, 0xFD62F97A, 0x8A65C9EC, 0x14015C4F, 0x63066CD9, 0xFA0F3D63, 0x8D080DF5,
    0x3B6E20C8, 0x4C69105E, 0xD56041E4, 0xA2677172, 0x3C03E4D1, 0x4B04D447, 0xD20D85FD, 0xA50AB56B,
    0x35B5A8FA, 0x42B2986C, 0xDBBBC9D6, 0xACBCF940, 0x32D86CE3, 0x45DF5C75, 0xDCD60DCF, 0xABD13D59,
    0x26D930AC, 0x51DE003A, 0xC8D75180, 0xBFD06116, 0x21B4F4B5, 0x56B3C423, 0xCFBA9599, 0xB8BDA50F,
    0x2802B89E, 0x5F058808, 0xC60CD9B2, 0xB10BE924, 0x2F6F7C87, 0x58684C11, 0xC1611DAB, 0xB6662D3D,
    0x76DC4190, 0x01DB7106, 0x98D220BC, 0xEFD5102A, 0x71B18589, 0x06B6B51F, 0x9FBFE4A5, 0xE8B8D433,
    0x7807C9A2, 0x0F00F934, 0x9609A88E, 0xE10E9818, 0x7F6A0DBB, 0x086D3D2D, 0x91646C97, 0xE6635C01,
    0x6B6B51F4, 0x1C6C6162, 0x856530D8, 0xF262004E, 0x6C0695ED, 0x1B01A57B, 0x8208F4C1, 0xF50FC457,
    0x65B0D9C6, 0x12B7E950, 0x8BBEB8EA, 0xFCB9887C, 0x62DD1DDF, 0x15DA2D49, 0x8CD37CF3, 0xFBD44C65,
    0x4DB26158, 0x3AB551CE, 0xA3BC0074, 0xD4BB30E2, 0x4ADFA541, 0x3DD895D7, 0xA4D1C46D, 0xD3D6F4FB,
    0x4369E96A, 0x346ED9FC, 0xAD678846, 0xDA60B8D0, 0x44042D73, 0x33031DE5, 0xAA0A4C5F, 0xDD0D7CC9,
    0x5005713C, 0x270241AA, 0xBE0B1010, 0xC90C2086, 0x5768B525, 0x206F85B3, 0xB966D409, 0xCE61E49F,
    0x5EDEF90E, 0x29D9C998, 0xB0D09822, 0xC7D7A8B4, 0x59B33D17, 0x2EB40D81, 0xB7BD5C3B, 0xC0BA6CAD,
    0xEDB88320, 0x9ABFB3B6, 0x03B6E20C, 0x74B1D29A, 0xEAD54739, 0x9DD277AF, 0x04DB2615, 0x73DC1683,
    0xE3630B12, 0x94643B84, 0x0D6D6A3E, 0x7A6A5AA8, 0xE40ECF0B, 0x9309FF9D, 0x0A00AE27, 0x7D079EB1,
    0xF00F9344, 0x8708A3D2, 0x1E01F268, 0x6906C2FE, 0xF762575D, 0x806567CB, 0x196C3671, 0x6E6B06E7,
    0xFED41B76, 0x89D32BE0, 0x10DA7A5A, 0x67DD4ACC, 0xF9B9DF6F, 0x8EBEEFF9, 0x17B7BE43, 0x60B08ED5,
    0xD6D6A3E8, 0xA1D1937E, 0x38D8C2C4, 0x4FDFF252, 0xD1BB67F1, 0xA6BC5767, 0x3FB506DD, 0x48B2364B,
    0xD80D2BDA, 0xAF0A1B4C, 0x36034AF6, 0x41047A60, 0xDF60EFC3, 0xA867DF55, 0x316E8EEF, 0x4669BE79,
    0xCB61B38C, 0xBC66831A, 0x256FD2A0, 0x5268E236, 0xCC0C7795, 0xBB0B4703, 0x220216B9, 0x5505262F,
    0xC5BA3BBE, 0xB2BD0B28, 0x2BB45A92, 0x5CB36A04, 0xC2D7FFA7, 0xB5D0CF31, 0x2CD99E8B, 0x5BDEAE1D,
    0x9B64C2B0, 0xEC63F226, 0x756AA39C, 0x026D930A, 0x9C0906A9, 0xEB0E363F, 0x72076785, 0x05005713,
    0x95BF4A82, 0xE2B87A14, 0x7BB12BAE, 0x0CB61B38, 0x92D28E9B, 0xE5D5BE0D, 0x7CDCEFB7, 0x0BDBDF21,
    0x86D3D2D4, 0xF1D4E242, 0x68DDB3F8, 0x1FDA836E, 0x81BE16CD, 0xF6B9265B, 0x6FB077E1, 0x18B74777,
    0x88085AE6, 0xFF0F6A70, 0x66063BCA, 0x11010B5C, 0x8F659EFF, 0xF862AE69, 0x616BFFD3, 0x166CCF45,
    0xA00AE278, 0xD70DD2EE, 0x4E048354, 0x3903B3C2, 0xA7672661, 0xD06016F7, 0x4969474D, 0x3E6E77DB,
    0xAED16A4A, 0xD9D65ADC, 0x40DF0B66, 0x37D83BF0, 0xA9BCAE53, 0xDEBB9EC5, 0x47B2CF7F, 0x30B5FFE9,
    0xBDBDF21C, 0xCABAC28A, 0x53B39330, 0x24B4A3A6, 0xBAD03605, 0xCDD70693, 0x54DE5729, 0x23D967BF,
    0xB3667A2E, 0xC4614AB8, 0x5D681B02, 0x2A6F2B94, 0xB40BBE37, 0xC30C8EA1, 0x5A05DF1B, 0x2D02EF8D,
];

const MD_SHA1_INIT: &[u32] = &[
    0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476,
];

const MD4_SHA1_CONSTS: &[u32] = &[
    0x5A827999, 0x6ED9EBA1,
];

const SHA1_CONSTS: &[u32] = &[
    0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6,
];

const MD5_CONSTS: &[u32] = &[
    0xD76AA478, 0xE8C7B756, 0x242070DB, 0xC1BDCEEE, 0xF57C0FAF, 0x4787C62A, 0xA8304613, 0xFD469501,
    0x698098D8, 0x8B44F7AF, 0xFFFF5BB1, 0x895CD7BE, 0x6B901122, 0xFD987193, 0xA679438E, 0x49B40821,
    0xF61E2562, 0xC040B340, 0x265E5A51, 0xE9B6C7AA, 0xD62F105D, 0x02441453, 0xD8A1E681, 0xE7D3FBC8,
    0x21E1CDE6, 0xC33707D6, 0xF4D50D87, 0x455A14ED, 0xA9E3E905, 0xFCEFA3F8, 0x676F02D9, 0x8D2A4C8A,
    0xFFFA3942, 0x8771F681, 0x6D9D6122, 0xFDE5380C, 0xA4BEEA44, 0x4BDECFA9, 0xF6BB4B60, 0xBEBFBC70,
    0x289B7EC6, 0xEAA127FA, 0xD4EF3085, 0x04881D05, 0xD9D4D039, 0xE6DB99E5, 0x1FA27CF8, 0xC4AC5665,
    0xF4292244, 0x432AFF97, 0xAB9423A7, 0xFC93A039, 0x655B59C3, 0x8F0CCC92, 0xFFEFF47D, 0x85845DD1,
    0x6FA87E4F, 0xFE2CE6E0, 0xA3014314, 0x4E0811A1, 0xF7537E82, 0xBD3AF235, 0x2AD7D2BB, 0xEB86D391,
];

const SHA256_ROUND_CONSTS: &[u32] = &[
    0x428A2F98, 0x71374491, 0xB5C0FBCF, 0xE9B5DBA5, 0x3956C25B, 0x59F111F1, 0x923F82A4, 0xAB1C5ED5,
    0xD807AA98, 0x12835B01, 0x243185BE, 0x550C7DC3, 0x72BE5D74, 0x80DEB1FE, 0x9BDC06A7, 0xC19BF174,
    0xE49B69C1, 0xEFBE4786, 0x0FC19DC6, 0x240CA1CC, 0x2DE92C6F, 0x4A7484AA, 0x5CB0A9DC, 0x76F988DA,
    0x983E5152, 0xA831C66D, 0xB00327C8, 0xBF597FC7, 0xC6E00BF3, 0xD5A79147, 0x06CA6351, 0x14292967,
    0x27B70A85, 0x2E1B2138, 0x4D2C6DFC, 0x53380D13, 0x650A7354, 0x766A0ABB, 0x81C2C92E, 0x92722C85,
    0xA2BFE8A1, 0xA81A664B, 0xC24B8B70, 0xC76C51A3, 0xD192E819, 0xD6990624, 0xF40E3585, 0x106AA070,
    0x19A4C116, 0x1E376C08, 0x2748774C, 0x34B0BCB5, 0x391C0CB3, 0x4ED8AA4A, 0x5B9CCA4F, 0x682E6FF3,
    0x748F82EE, 0x78A5636F, 0x84C87814, 0x8CC70208, 0x90BEFFFA, 0xA4506CEB, 0xBEF9A3F7, 0xC67178F2,
];

const SHA224_INIT: &[u32] = &[
    0xC1059ED8, 0x367CD507, 0x3070DD17, 0xF70E5939, 0xFFC00B31, 0x68581511, 0x64F98FA7, 0xBEFA4FA4,
];

const SHA256_INIT: &[u32] = &[
    0x6A09E667, 0xBB67AE85, 0x3C6EF372, 0xA54FF53A, 0x510E527F, 0x9B05688C, 0x1F83D9AB, 0x5BE0CD19,
];

const SHA512_ROUND_CONSTS: &[u32] = &[
    0x428A2F98, 0xD728AE22, 0x71374491, 0x23EF65CD, 0xB5C0FBCF, 0xEC4D3B2F, 0xE9B5DBA5, 0x8189DBBC,
    0x3956C25B, 0xF348B538, 0x59F111F1, 0xB605D019, 0x923F82A4, 0xAF194F9B, 0xAB1C5ED5, 0xDA6D8118,
    0xD807AA98, 0xA3030242, 0x12835B01, 0x45706FBE, 0x243185BE, 0x4EE4B28C, 0x550C7DC3, 0xD5FFB4E2,
    0x72BE5D74, 0xF27B896F, 0x80DEB1FE, 0x3B1696B1, 0x9BDC06A7, 0x25C71235, 0xC19BF174, 0xCF692694,
    0xE49B69C1, 0x9EF14AD2, 0xEFBE4786, 0x384F25E3, 0x0FC19DC6, 0x8B8CD5B5, 0x240CA1CC, 0x77AC9C65,
    0x2DE92C6F, 0x592B0275, 0x4A7484AA, 0x6EA6E483, 0x5CB0A9DC, 0xBD41FBD4, 0x76F988DA, 0x831153B5,
    0x983E5152, 0xEE66DFAB, 0xA831C66D, 0x2DB43210, 0xB00327C8, 0x98FB213F, 0xBF597FC7, 0xBEEF0EE4,
    0xC6E00BF3, 0x3DA88FC2, 0xD5A79147, 0x930AA725, 0x06CA6351, 0xE003826F, 0x14292967, 0x0A0E6E70,
    0x27B70A85, 0x46D22FFC, 0x2E1B2138, 0x5C26C926, 0x4D2C6DFC, 0x5AC42AED, 0x53380D13, 0x9D95B3DF,
    0x650A7354, 0x8BAF63DE, 0x766A0ABB, 0x3C77B2A8, 0x81C2C92E, 0x47EDAEE6, 0x92722C85, 0x1482353B,
    0xA2BFE8A1, 0x4CF10364, 0xA81A664B, 0xBC423001, 0xC24B8B70, 0xD0F89791, 0xC76C51A3, 0x0654BE30,
    0xD192E819, 0xD6EF5218, 0xD6990624, 0x5565A910, 0xF40E3585, 0x5771202A, 0x106AA070, 0x32BBD1B8,
    0x19A4C116, 0xB8D2D0C8, 0x1E376C08, 0x5141AB53, 0x2748774C, 0xDF8EEB99, 0x34B0BCB5, 0xE19B48A8,
    0x391C0CB3, 0xC5C95A63, 0x4ED8AA4A, 0xE3418ACB, 0x5B9CCA4F, 0x7763E373, 0x682E6FF3, 0xD6B2B8A3,
    0x748F82EE, 0x5DEFB2FC, 0x78A5636F, 0x43172F60, 0x84C87814, 0xA1F0AB72, 0x8CC70208, 0x1A6439EC,
    0x90BEFFFA, 0x23631E28, 0xA4506CEB, 0xDE82BDE9, 0xBEF9A3F7, 0xB2C67915, 0xC67178F2, 0xE372532B,
    0xCA273ECE, 0xEA26619C, 0xD186B8C7, 0x21C0C207, 0xEADA7DD6, 0xCDE0EB1E, 0xF57D4F7F, 0xEE6ED178,
    0x06F067AA, 0x72176FBA, 0x0A637DC5, 0xA2C898A6, 0x113F9804, 0xBEF90DAE, 0x1B710B35, 0x131C471B,
    0x28DB77F5, 0x23047D84, 0x32CAAB7B, 0x40C72493, 0x3C9EBE0A, 0x15C9BEBC, 0x431D67C4, 0x9C100D4C,
    0x4CC5D4BE, 0xCB3E42B6, 0x597F299C, 0xFC657E2A, 0x5FCB6FAB, 0x3AD6FAEC, 0x6C44198C, 0x4A475817,
];

const SHA384_INIT: &[u32] = &[
    0xCBBB9D5D, 0xC1059ED8, 0x629A292A, 0x367CD507, 0x9159015A, 0x3070DD17, 0x152FECD8, 0xF70E5939,
    0x67332667, 0xFFC00B31, 0x8EB44A87, 0x68581511, 0xDB0C2E0D, 0x64F98FA7, 0x47B5481D, 0xBEFA4FA4,
];

const SHA512_INIT: &[u32] = &[
    0x6A09E667, 0xF3BCC908, 0xBB67AE85, 0x84CAA73B, 0x3C6EF372, 0xFE94F82B, 0xA54FF53A, 0x5F1D36F1,
    0x510E527F, 0xADE682D1, 0x9B05688C, 0x2B3E6C1F, 0x1F83D9AB, 0xFB41BD6B, 0x5BE0CD19, 0x137E2179,
];

const TEA_DELTA: &[u32] = &[
    0x9E3779B9,
];

const TEA_SUM: &[u32] = &[
    0xC6EF3720,
];

const ZIPCRYPTO_KEYS: &[u32] = &[
    0x12345678, 0x23456789, 0x34567890,
];

const ZIPCRYPTO_LCG_A: &[u32] = &[
    0x08088405,
];

const FNV_PRIME: &[u32] = &[
    0x01000193,
];

const FNV_OFFSET: &[u32] = &[
    0x811C9DC5,
];

const WHIRLPOOL_S_BOX: &[u32] = &[
    0xE8C62318, 0x4F01B887, 0xF5D2A636, 0x52916F79, 0x8E9BBC60, 0x357B0CA3, 0xC2D7E01D, 0x57FE4B2E,
    0xE5377715, 0xDA4AF09F, 0x0A29C958, 0x856BA0B1, 0xF4105DBD, 0x67053ECB, 0x8B4127E4, 0xD8957DA7,
    0x667CEEFB, 0x9E4717DD, 0x07BF2DCA, 0x33835AAD, 0x71AA0263, 0xD94919C8, 0x885BE3F2, 0xB032269A,
    0x80D50FE9, 0x4834CDBE, 0x5F907AFF, 0xAE1A6820, 0x229354B4, 0x1273F164, 0xECC30840, 0x3D8DA1DB,
    0x2BCF0097, 0x1BD68276, 0x506AAFB5, 0xEF30F345, 0xEAA2553F, 0xC02FBA65, 0x4DFD1CDE, 0x8A067592,
    0x1F0EE6B2, 0x96A8D462, 0x5925C5F9, 0x4C397284, 0x8C38785E, 0x61E2A5D1, 0x1E9C21B3, 0x04FCC743,
    0x0D6D9951, 0x247EDFFA, 0x11CEAB3B, 0xEBB74E8F, 0xF794813C, 0xD32C13B9, 0x03C46EE7, 0xA97F4456,
    0x53C1BB2A, 0x6C9D0BDC, 0x46F67431, 0xE11489AC, 0x09693A16, 0xEDD0B670, 0xA49842CC, 0x86F85C28,
];

const LCG_MSVC_GLIBC: &[u32] = &[
    0x41C64E6D,
];

const LCG_DELPHI: &[u32] = &[
    0x08088405,
];

const LCG_VBA: &[u32] = &[
    0x00FD43FD,
];

/// Every built-in algorithm, in report order
pub(crate) const BUILTIN: &[BuiltinAlgorithm] = &[
    (
        "AES",
        &[
            ("Rcon", AES_RCON),
            ("S-box", AES_S_BOX),
            ("Reverse S-box", AES_REVERSE_S_BOX),
        ],
    ),
    (
        "Salsa20 / ChaCha20",
        &[
            ("Init", SALSA20_SIGMA),
        ],
    ),
    (
        "Base64",
        &[
            ("Char map", BASE64_CHAR_MAP),
            ("Decode map (00)", BASE64_DECODE_MAP_00),
            ("Decode map (FF)", BASE64_DECODE_MAP_FF),
        ],
    ),
    (
        "CRC-32",
        &[
            ("Polynomial 1", CRC32_POLYNOMIAL_1),
            ("Polynomial 2", CRC32_POLYNOMIAL_2),
            ("Generator", CRC32_GENERATOR),
            ("Poly Table", CRC32_POLY_TABLE),
        ],
    ),
    (
        "MD4 / MD5 / SHA-1",
        &[
            ("Init", MD_SHA1_INIT),
            ("[MD4 / SHA-1] Consts", MD4_SHA1_CONSTS),
            ("[SHA-1] Consts", SHA1_CONSTS),
            ("[MD5] Consts", MD5_CONSTS),
        ],
    ),
    (
        "SHA-224 / SHA-256",
        &[
            ("Round Consts", SHA256_ROUND_CONSTS),
            ("[SHA-224] Init", SHA224_INIT),
            ("[SHA-256] Init", SHA256_INIT),
        ],
    ),
    (
        "SHA-384 / SHA-512",
        &[
            ("Round Consts", SHA512_ROUND_CONSTS),
            ("[SHA-384] Init", SHA384_INIT),
            ("[SHA-512] Init", SHA512_INIT),
        ],
    ),
    (
        "TEA / XTEA / XXTEA",
        &[
            ("Delta", TEA_DELTA),
            ("[TEA] Sum", TEA_SUM),
        ],
    ),
    (
        "ZipCrypto",
        &[
            ("Keys", ZIPCRYPTO_KEYS),
            ("LCG a", ZIPCRYPTO_LCG_A),
        ],
    ),
    (
        "FNV",
        &[
            ("Prime", FNV_PRIME),
            ("Offset", FNV_OFFSET),
        ],
    ),
    (
        "Whirlpool",
        &[
            ("S-box", WHIRLPOOL_S_BOX),
        ],
    ),
    (
        "LCG params",
        &[
            ("C/C++", LCG_MSVC_GLIBC),
            ("Delphi/Pascal", LCG_DELPHI),
            ("VBA", LCG_VBA),
        ],
    ),
];

/// True when every algorithm has at least one indicator and every
/// indicator at least one constant
const fn table_is_valid(table: &[BuiltinAlgorithm]) -> bool {
    let mut i = 0;
    while i < table.len() {
        let indicators = table[i].1;
        if indicators.is_empty() {
            return false;
        }
        let mut j = 0;
        while j < indicators.len() {
            if indicators[j].1.is_empty() {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(table_is_valid(BUILTIN), "built-in table has an empty entry");

//! Published known-answer vectors

/// Deterministic ECDSA over SHA-256 (RFC 6979 nonces, low-S)
pub struct EcdsaVector {
    pub secret: &'static str,
    pub public: &'static str,
    pub message: &'static str,
    pub r: &'static str,
    pub s: &'static str,
}

pub const ECDSA_RFC6979: &[EcdsaVector] = &[
    EcdsaVector {
        secret: "0000000000000000000000000000000000000000000000000000000000000001",
        public: "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        message: "Satoshi Nakamoto",
        r: "934b1ea10a4b3c1757e2b0c017d0b6143ce3c9a7e6a4a49860d7a6ab210ee3d8",
        s: "2442ce9d2b916064108014783e923ec36b49743e2ffa1c4496f01a512aafd9e5",
    },
    EcdsaVector {
        secret: "0000000000000000000000000000000000000000000000000000000000000001",
        public: "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        message: "All those moments will be lost in time, like tears in rain. Time to die...",
        r: "8600dbd41e348fe5c9465ab92d23e3db8b98b873beecd930736488696438cb6b",
        s: "547fe64427496db33bf66019dacbf0039c04199abb0122918601db38a72cfc21",
    },
    EcdsaVector {
        secret: "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140",
        public: "0379be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        message: "Satoshi Nakamoto",
        r: "fd567d121db66e382991534ada77a6bd3106f0a1098c231e47993447cd6af2d0",
        s: "6b39cd0eb1bc8603e159ef5c20a5c8ad685a45b06ce9bebed3f153d10d93bed5",
    },
    EcdsaVector {
        secret: "f8b8af8ce3c7cca5e300d33939540c10d45ce001b8f252bfbc57ba0342904181",
        public: "0292df7b245b81aa637ab4e867c8d511008f79161a97d64f2ac709600352f7acbc",
        message: "Alan Turing",
        r: "7063ae83e7f62bbb171798131b4a0564b956930092b33b07b395615d9ec7e15c",
        s: "58dfcc1e00a35e1572f366ffe34ba0fc47db1e7189759b9fb233c5b05ab388ea",
    },
    EcdsaVector {
        secret: "e91671c46231f833a6406ccbea0e3e392c76c167bac1cb013f6f1013980455c2",
        public: "03567b7512001f3cc4dcb8b8096c046fff571ab07adb2126cd42908f2ff1ca424a",
        message: "There is a computer disease that anybody who works with computers knows about. It's a very serious disease and it interferes completely with the work. The trouble with computers is that you 'play' with them!",
        r: "b552edd27580141f3b2a5463048cb7cd3e047b97c9f98076c32dbdf85a68718b",
        s: "279fa72dd19bfae05577e06c7c0c1900c371fcd5893f7e1d56a37d30174671f6",
    },
];

/// BIP340 vectors; `secret` and `aux` are empty for verify-only entries.
/// Vectors 15 to 18 sign messages of 0, 1, 17 and 100 bytes.
pub struct SchnorrVector {
    pub index: usize,
    pub secret: &'static str,
    pub public: &'static str,
    pub aux: &'static str,
    pub message: &'static str,
    pub signature: &'static str,
}

pub const BIP340: &[SchnorrVector] = &[
    SchnorrVector {
        index: 0,
        secret: "0000000000000000000000000000000000000000000000000000000000000003",
        public: "F9308A019258C31049344F85F89D5229B531C845836F99B08601F113BCE036F9",
        aux: "0000000000000000000000000000000000000000000000000000000000000000",
        message: "0000000000000000000000000000000000000000000000000000000000000000",
        signature: "E907831F80848D1069A5371B402410364BDF1C5F8307B0084C55F1CE2DCA821525F66A4A85EA8B71E482A74F382D2CE5EBEEE8FDB2172F477DF4900D310536C0",
    },
    SchnorrVector {
        index: 1,
        secret: "B7E151628AED2A6ABF7158809CF4F3C762E7160F38B4DA56A784D9045190CFEF",
        public: "DFF1D77F2A671C5F36183726DB2341BE58FEAE1DA2DECED843240F7B502BA659",
        aux: "0000000000000000000000000000000000000000000000000000000000000001",
        message: "243F6A8885A308D313198A2E03707344A4093822299F31D0082EFA98EC4E6C89",
        signature: "6896BD60EEAE296DB48A229FF71DFE071BDE413E6D43F917DC8DCF8C78DE33418906D11AC976ABCCB20B091292BFF4EA897EFCB639EA871CFA95F6DE339E4B0A",
    },
    SchnorrVector {
        index: 2,
        secret: "C90FDAA22168C234C4C6628B80DC1CD129024E088A67CC74020BBEA63B14E5C9",
        public: "DD308AFEC5777E13121FA72B9CC1B7CC0139715309B086C960E18FD969774EB8",
        aux: "C87AA53824B4D7AE2EB035A2B5BBBCCC080E76CDC6D1692C4B0B62D798E6D906",
        message: "7E2D58D8B3BCDF1ABADEC7829054F90DDA9805AAB56C77333024B9D0A508B75C",
        signature: "5831AAEED7B44BB74E5EAB94BA9D4294C49BCF2A60728D8B4C200F50DD313C1BAB745879A5AD954A72C45A91C3A51D3C7ADEA98D82F8481E0E1E03674A6F3FB7",
    },
    SchnorrVector {
        index: 3,
        secret: "0B432B2677937381AEF05BB02A66ECD012773062CF3FA2549E44F58ED2401710",
        public: "25D1DFF95105F5253C4022F628A996AD3A0D95FBF21D468A1B33F8C160D8F517",
        aux: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
        message: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
        signature: "7EB0509757E246F19449885651611CB965ECC1A187DD51B64FDA1EDC9637D5EC97582B9CB13DB3933705B32BA982AF5AF25FD78881EBB32771FC5922EFC66EA3",
    },
    SchnorrVector {
        index: 4,
        secret: "",
        public: "D69C3509BB99E412E68B0FE8544E72837DFA30746D8BE2AA65975F29D22DC7B9",
        aux: "",
        message: "4DF3C3F68FCC83B27E9D42C90431A72499F17875C81A599B566C9889B9696703",
        signature: "00000000000000000000003B78CE563F89A0ED9414F5AA28AD0D96D6795F9C6376AFB1548AF603B3EB45C9F8207DEE1060CB71C04E80F593060B07D28308D7F4",
    },
    SchnorrVector {
        index: 15,
        secret: "0340034003400340034003400340034003400340034003400340034003400340",
        public: "778CAA53B4393AC467774D09497A87224BF9FAB6F6E68B23086497324D6FD117",
        aux: "0000000000000000000000000000000000000000000000000000000000000000",
        message: "",
        signature: "71535DB165ECD9FBBC046E5FFAEA61186BB6AD436732FCCC25291A55895464CF6069CE26BF03466228F19A3A62DB8A649F2D560FAC652827D1AF0574E427AB63",
    },
    SchnorrVector {
        index: 16,
        secret: "0340034003400340034003400340034003400340034003400340034003400340",
        public: "778CAA53B4393AC467774D09497A87224BF9FAB6F6E68B23086497324D6FD117",
        aux: "0000000000000000000000000000000000000000000000000000000000000000",
        message: "11",
        signature: "08A20A0AFEF64124649232E0693C583AB1B9934AE63B4C3511F3AE1134C6A303EA3173BFEA6683BD101FA5AA5DBC1996FE7CACFC5A577D33EC14564CEC2BACBF",
    },
    SchnorrVector {
        index: 17,
        secret: "0340034003400340034003400340034003400340034003400340034003400340",
        public: "778CAA53B4393AC467774D09497A87224BF9FAB6F6E68B23086497324D6FD117",
        aux: "0000000000000000000000000000000000000000000000000000000000000000",
        message: "0102030405060708090A0B0C0D0E0F1011",
        signature: "5130F39A4059B43BC7CAC09A19ECE52B5D8699D1A71E3C52DA9AFDB6B50AC370C4A482B77BF960F8681540E25B6771ECE1E5A37FD80E5A51897C5566A97EA5A5",
    },
    SchnorrVector {
        index: 18,
        secret: "0340034003400340034003400340034003400340034003400340034003400340",
        public: "778CAA53B4393AC467774D09497A87224BF9FAB6F6E68B23086497324D6FD117",
        aux: "0000000000000000000000000000000000000000000000000000000000000000",
        message: concat!(
            "9999999999999999999999999999999999999999999999999999999999999999999999999999999999999999999999999999",
            "9999999999999999999999999999999999999999999999999999999999999999999999999999999999999999999999999999",
        ),
        signature: "403B12B0D8555A344175EA7EC746566303321E5DBFA8BE6F091635163ECA79A8585ED3E3170807E7C03B720FC54C7B23897FCBA0E9D0B4A06894CFD249F22367",
    },
];

/// BIP86 key-path-only taproot output for the first receive address
pub const BIP86_INTERNAL_KEY: &str =
    "cc8a4bc64d897bddc5fbc2f670f7a8ba0b386779106cf1223c6fc5d7cd6fc115";
pub const BIP86_OUTPUT_KEY: &str =
    "a60869f0dbcf1dc659c9cecbaf8050135ea9e8cdc487053f1dc6880949dc684c";

/// SHA-256 of the compressed encoding of 6·G, i.e. ECDH between 2 and 3
pub const ECDH_2_3: &str = "c7d9ba2fa1496c81be20038e5c608f2fd5d0246d8643783730df6c2bbb855cb2";

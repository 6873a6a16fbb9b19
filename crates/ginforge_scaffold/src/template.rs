//! The built-in template set.
//!
//! One literal template per generated file role. Templates are fixed at
//! build time of the tool itself; rendering is pure placeholder
//! substitution, not a templating language. Two placeholder kinds exist:
//!
//! - `{{Appname}}` — replaced with the project name (used in import paths
//!   and the `app_name` configuration key).
//! - `{{Backtick}}` — replaced with a literal backtick. Generated Go source
//!   needs raw-string delimiters and struct tags, and keeping the backtick
//!   behind a placeholder keeps the substitution rule uniform for every
//!   quoting context the templates may grow.

/// `conf/app.ini` — system, database and cache settings.
pub const APP_CONF: &str = r#"[sysInfo]
app_name = {{Appname}}
run_port = :7070
run_mode = debug

[mysqlInfo]
dbname = databasename
dbuser = root
dbpwd = password
dbhost = localhost:3306

[redisInfo]
redis_Host = localhost:6379
redis_IsAuth = 0
redis_Auth = aaa:bbb
redis_MaxIdle = 20
redis_MaxActive = 1000
redis_Prefix = prefix
redis_Select = 9

"#;

/// `controller/default.go` — a sample JSON handler.
pub const CONTROLLER: &str = r#"package controller

import (
	"github.com/gin-gonic/gin"
	"net/http"
	"{{Appname}}/model"
)

func AuctionController(c *gin.Context) {
	realse := model.NewRealse()

	c.JSON(http.StatusOK, realse)
	return
}
"#;

/// `model/res.go` — shared configuration maps, response codes and the
/// response envelope.
pub const MODEL: &str = r#"package model

import (
	"fmt"
	"github.com/astaxie/beego/logs"
)

var (
	MysqlInfo = make(map[string]string) // MySQL settings
	RedisInfo = make(map[string]string) // Redis settings
	SysInfo   = make(map[string]string) // runtime settings
	Log       *logs.BeeLogger
)

// response codes
const (
	CodeStatusOK CodeStatus = 0 // success
)

// response messages
var messageTmpls = map[string]string{
	CodeStatusOK.String(): "success",
}

type CodeStatus int16
type ReportStatus string

func NewRealse() *Realse {
	return &Realse{"0", "0", make(map[string]interface{})}
}

type Realse struct {
	Ret  string                 {{Backtick}}json:"ret"{{Backtick}}
	Msg  string                 {{Backtick}}json:"msg"{{Backtick}}
	Data map[string]interface{} {{Backtick}}json:"data"{{Backtick}}
}

func (self CodeStatus) String() string {
	return fmt.Sprintf("%d", self)
}

func (self CodeStatus) Message() string {
	return messageTmpls[self.String()]
}

func (self *Realse) Write(code CodeStatus) {
	self.Ret = code.String()
	self.Msg = code.Message()
}

"#;

/// `service/service.go` — MySQL and Redis connection pools.
pub const SERVICE: &str = r#"package service

import (
	"fmt"
	"github.com/garyburd/redigo/redis"
	_ "github.com/go-sql-driver/mysql"
	"github.com/go-xorm/xorm"
	"{{Appname}}/model"
	"log"
	"time"
)

var (
	MYSQLPOOL *xorm.Engine // database connection pool
	REDISPOOL *redis.Pool  // cache connection pool
)

func InitMysql() {
	mysqlDns := fmt.Sprintf("%s:%s@tcp(%s)/%s?timeout=3s&parseTime=true&loc=Local&charset=utf8", model.MysqlInfo["dbuser"], model.MysqlInfo["dbpwd"], model.MysqlInfo["dbhost"], model.MysqlInfo["dbname"])
	if conn, err := xorm.NewEngine("mysql", mysqlDns); err != nil {
		log.Fatal("mysql db connection err", err)
	} else {
		MYSQLPOOL = conn
	}
	MYSQLPOOL.ShowSQL(true)
}

func InitRedis() {
	REDISPOOL = &redis.Pool{
		MaxIdle:     10,
		MaxActive:   0,
		IdleTimeout: 180 * time.Second,
		Dial: func() (redis.Conn, error) {
			c, err := redis.Dial("tcp", model.RedisInfo["redis_Host"])
			if err != nil {
				log.Fatal("Init Redis Failed:", err.Error())
				return nil, err
			}
			if model.RedisInfo["redis_IsAuth"] == "1" {
				if _, err := c.Do("AUTH", model.RedisInfo["redis_Auth"]); err != nil {
					log.Fatal("Init Redis Failed:", err.Error())
					c.Close()
					return nil, err
				}
			}
			if _, err = c.Do("SELECT", model.RedisInfo["redis_Select"]); err != nil {
				log.Fatal("Init Redis Failed:", err.Error())
				c.Close()
				return nil, err
			}
			return c, nil
		},
	}
}
"#;

/// `routers/router.go` — route registration.
pub const ROUTER: &str = r#"package routers

import (
	"github.com/gin-gonic/gin"
	"{{Appname}}/controller"
)

func Route(engine *gin.Engine) {
	// Examples
	// engine.GET("/api/v1/auction", controller.AuctionController)
	// engine.POST("/api/v1/auction", controller.AddAuctionController)
	// engine.PUT("/api/v1/somePut", controller.PuttingController)
	// engine.DELETE("/api/v1/someDelete", controller.DeletingController)
	// engine.PATCH("/api/v1/somePatch", controller.PatchingController)
	// engine.HEAD("/api/v1/someHead", controller.HeadController)
	// engine.OPTIONS("/api/v1/someOptions", controller.OptionsController)

	// Examples route group
	// v2 := engine.Group("/api/v2")
	// {
		// v2.GET("/", controller.groupController)
		// v2.GET("/g1", controller.group1Controller)
		// v2.GET("/g2", controller.group2Controller)
	// }

	engine.GET("/api/v1/auction", controller.AuctionController)
}
"#;

/// `config.go` — logging setup and configuration loading at startup.
pub const BOOTSTRAP: &str = r#"package main

import (
	"flag"
	"github.com/astaxie/beego/logs"
	"github.com/larspensjo/config"
	"{{Appname}}/model"
	"{{Appname}}/service"
	"log"
)

var configFile string

func init() {
	model.Log = logs.NewLogger(1000)
	model.Log.SetLogger("file", {{Backtick}}{"filename":"logs/run.log"}{{Backtick}})
	model.Log.EnableFuncCallDepth(true)

	flag.StringVar(&configFile, "c", "./conf/app.ini", "General configuration file")
	flag.Parse()

	model.Log.Info("==============================")
	model.Log.Info("= loading configuration ...")
	initConf()
	model.Log.Info("= connecting mysql pool ...")
	service.InitMysql()
	model.Log.Info("= connecting redis pool ...")
	service.InitRedis()
}

func initConf() {
	conf, err := config.ReadDefault(configFile)
	if err != nil {
		log.Fatal("Fail to find", configFile, err)
	}

	model.Log.Info("= [mysqlInfo]")
	l, err := conf.Options("mysqlInfo")
	if err != nil {
		log.Fatal("Fail to find mysql config ", err)
	}
	for _, k := range l {
		v, err := conf.String("mysqlInfo", k)
		if err != nil {
			log.Fatalf("mysqlInfo [%s] err:%v", k, err)
		}
		model.Log.Info("=	%s:%s", k, v)
		model.MysqlInfo[k] = v
	}

	model.Log.Info("= [sysInfo]")
	l, err = conf.Options("sysInfo")
	if err != nil {
		log.Fatal("Fail to find sys Info config ", err)
	}
	for _, k := range l {
		v, err := conf.String("sysInfo", k)
		if err != nil {
			log.Fatalf("sys Info [%s] err:%v", k, err)
		}
		model.Log.Info("=	%s:%s", k, v)
		model.SysInfo[k] = v
	}

	model.Log.Info("= [redisInfo]")
	l, err = conf.Options("redisInfo")
	if err != nil {
		log.Fatal("Fail to find redis Info config ", err)
	}
	for _, k := range l {
		v, err := conf.String("redisInfo", k)
		if err != nil {
			log.Fatalf("redis Info [%s] err:%v", k, err)
		}
		model.Log.Info("=	%s:%s", k, v)
		model.RedisInfo[k] = v
	}
	model.Log.Info("==============================")
}

"#;

/// `main.go` — the generated service entrypoint.
pub const ENTRYPOINT: &str = r#"package main

import (
	"github.com/gin-gonic/gin"
	"{{Appname}}/model"
	"{{Appname}}/routers"
)

func main() {
	r := gin.New()
	routers.Route(r)
	r.Static("/static", "./static")
	gin.SetMode(model.SysInfo["run_mode"])
	r.Run(model.SysInfo["run_port"])
}
"#;
